//! Turns a [`FeatureResult`] into something a person can read.
//!
//! [`render`] builds a display [`Document`] (written out as HTML by
//! [`Document::to_html`]); [`to_portable_text`] builds the Markdown export.
//! Both walk the same fields in the same order and omit the same empty sections.

mod html;
mod markdown;

use thiserror::Error;

use crate::models::{AcceptanceCriterion, FeatureResult, Story};

pub use html::escape_html;
pub use markdown::to_portable_text;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Malformed result: {0}")]
    MalformedResult(String),
}

/// A labeled paragraph such as "Rationale: ...".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub text: String,
}

impl Field {
    fn new(label: &'static str, text: &str) -> Self {
        Self {
            label,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpicBlock {
    pub title: String,
    pub fields: Vec<Field>,
}

/// One acceptance criterion with its nested test list (empty means no sub-list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionItem {
    pub criteria: String,
    pub tests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryBlock {
    pub title: String,
    pub fields: Vec<Field>,
    /// `None` when the story has no acceptance criteria; never `Some(vec![])`.
    pub acceptance_criteria: Option<Vec<CriterionItem>>,
    /// `None` when the story has no technical considerations; never `Some(vec![])`.
    pub technical_considerations: Option<Vec<String>>,
}

/// Display tree for one result: the epic, then its stories in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub epic: EpicBlock,
    pub stories: Vec<StoryBlock>,
}

/// Build the display document for a result.
pub fn render(result: &FeatureResult) -> Document {
    Document {
        epic: EpicBlock {
            title: result.epic_title.clone(),
            fields: vec![
                Field::new("Description", &result.description),
                Field::new("Rationale", &result.rationale),
                Field::new("Long Description", &result.long_description),
            ],
        },
        stories: result.stories.iter().map(render_story).collect(),
    }
}

/// Render untyped JSON, rejecting anything that is not a complete result.
///
/// Nothing is produced for `null` or partial input, so callers show an error
/// message instead of half a document.
pub fn render_value(value: serde_json::Value) -> Result<Document, RenderError> {
    let result = result_from_value(value)?;
    Ok(render(&result))
}

/// Parse the text of a saved result file. Text that is not JSON at all is
/// as malformed as JSON that does not match the model.
pub fn value_from_json(text: &str) -> Result<serde_json::Value, RenderError> {
    serde_json::from_str(text)
        .map_err(|e| RenderError::MalformedResult(format!("invalid JSON: {}", e)))
}

/// Check untyped JSON against the data model.
pub fn result_from_value(value: serde_json::Value) -> Result<FeatureResult, RenderError> {
    if value.is_null() {
        return Err(RenderError::MalformedResult("result is null".to_string()));
    }
    serde_json::from_value(value).map_err(|e| RenderError::MalformedResult(e.to_string()))
}

fn render_story(story: &Story) -> StoryBlock {
    StoryBlock {
        title: story.story_title.clone(),
        fields: vec![
            Field::new("Description", &story.description),
            Field::new("Agile Story", &story.agile_story),
            Field::new("Purpose", &story.purpose),
            Field::new("Rationale", &story.rationale),
        ],
        acceptance_criteria: non_empty(&story.acceptance_criteria)
            .map(|criteria| criteria.iter().map(render_criterion).collect()),
        technical_considerations: non_empty(&story.technical_considerations)
            .map(<[String]>::to_vec),
    }
}

fn render_criterion(criterion: &AcceptanceCriterion) -> CriterionItem {
    CriterionItem {
        criteria: criterion.criteria.clone(),
        tests: criterion.test_criteria.clone(),
    }
}

fn non_empty<T>(items: &[T]) -> Option<&[T]> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
