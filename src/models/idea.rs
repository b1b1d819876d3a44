use serde::{Deserialize, Serialize};

use super::FeatureRequest;

/// A suggested feature the user can start from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub short_title: String,
    pub long_description: String,
}

/// Picking an idea replaces the description with the idea's long form.
impl From<&Idea> for FeatureRequest {
    fn from(idea: &Idea) -> Self {
        FeatureRequest::new(idea.long_description.clone())
    }
}
