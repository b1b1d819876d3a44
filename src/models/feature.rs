use serde::{Deserialize, Deserializer, Serialize};

/// The structured result of one generation request: an epic broken into stories.
///
/// Produced once by the generation backend and only read afterwards. Sequence
/// order is display order for every consumer (renderer, exporter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureResult {
    pub epic_title: String,
    pub description: String,
    pub rationale: String,
    pub long_description: String,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub stories: Vec<Story>,
}

/// One unit of work under an epic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub story_title: String,
    pub description: String,
    /// "As a... I want... So that..." sentence.
    pub agile_story: String,
    pub purpose: String,
    pub rationale: String,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub acceptance_criteria: Vec<AcceptanceCriterion>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub technical_considerations: Vec<String>,
}

/// A condition that defines a story as done, with optional sub-tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptanceCriterion {
    pub criteria: String,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub test_criteria: Vec<String>,
}

/// Body of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRequest {
    pub description: String,
}

impl FeatureRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// The backend omits optional lists or sends `null` for them; both mean "none".
fn nullable_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
