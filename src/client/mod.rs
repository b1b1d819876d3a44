//! HTTP client for the generation backend.
//!
//! The backend exposes two endpoints, both answering with a double-encoded
//! `{"result": "<json>"}` envelope (see [`envelope`]):
//! - `POST /api/generate` with `{"description": ...}` returns a [`FeatureResult`]
//! - `GET /api/generate-ideas[?focus=...]` returns a list of [`Idea`]s

pub mod envelope;

use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use envelope::{parse_envelope, parse_ideas, parse_result};

use crate::models::{FeatureRequest, FeatureResult, Idea};

/// Default backend URL for local development.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Shown when a description is blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a feature description";

/// Shown in place of the idea list when it could not be loaded.
pub const IDEAS_ERROR_MESSAGE: &str = "Error loading ideas";

/// Errors from a generation request.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Please enter a feature description")]
    EmptyInput,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}, body: {body}")]
    NetworkFailure { status: StatusCode, body: String },

    #[error("Invalid response format: {0}")]
    MalformedResponse(String),
}

impl GenerateError {
    /// Short text to show in place of the loading indicator.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => EMPTY_INPUT_MESSAGE.to_string(),
            other => format!("Error: {}", other),
        }
    }
}

/// Reject blank descriptions before anything goes over the wire.
///
/// The description is passed through as typed; only the emptiness check trims.
pub fn validate_description(description: &str) -> Result<&str, GenerateError> {
    if description.trim().is_empty() {
        Err(GenerateError::EmptyInput)
    } else {
        Ok(description)
    }
}

/// Outcome of an idea fetch. Failures are carried, never raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaList {
    pub ideas: Vec<Idea>,
    pub error: Option<String>,
}

impl IdeaList {
    pub fn failed(err: &GenerateError) -> Self {
        Self {
            ideas: Vec::new(),
            error: Some(err.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The text to surface to the user, if the fetch failed.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(|_| IDEAS_ERROR_MESSAGE)
    }
}

/// HTTP client for the generation backend.
#[derive(Debug, Clone)]
pub struct GeneratorClient {
    base_url: String,
    client: Client,
}

impl GeneratorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the idea endpoint. A blank focus is left off entirely.
    pub fn ideas_url(&self, focus: Option<&str>) -> String {
        let focus = focus.map(str::trim).filter(|f| !f.is_empty());
        match focus {
            Some(f) => format!(
                "{}/api/generate-ideas?focus={}",
                self.base_url,
                urlencoding::encode(f)
            ),
            None => format!("{}/api/generate-ideas", self.base_url),
        }
    }

    /// Read the body of a response, turning non-success statuses into errors.
    async fn read_body(&self, response: reqwest::Response) -> Result<String, GenerateError> {
        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(GenerateError::NetworkFailure { status, body })
        }
    }

    // ============================================================
    // Generation
    // ============================================================

    /// Generate an epic from a free-text description.
    pub async fn generate(&self, description: &str) -> Result<FeatureResult, GenerateError> {
        let description = validate_description(description)?;
        self.generate_request(&FeatureRequest::new(description)).await
    }

    /// Send a prepared request. Blank descriptions are still rejected locally.
    pub async fn generate_request(
        &self,
        request: &FeatureRequest,
    ) -> Result<FeatureResult, GenerateError> {
        validate_description(&request.description)?;

        let url = format!("{}/api/generate", self.base_url);
        tracing::debug!("Sending request to {}", url);
        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let body = self.read_body(response).await?;
        let inner = parse_envelope(&body)?;
        let result = parse_result(&inner)?;
        tracing::debug!(
            "Generated epic {:?} with {} stories",
            result.epic_title,
            result.stories.len()
        );
        Ok(result)
    }

    // ============================================================
    // Ideas
    // ============================================================

    /// Fetch idea suggestions, optionally narrowed by a focus.
    pub async fn try_fetch_ideas(&self, focus: Option<&str>) -> Result<Vec<Idea>, GenerateError> {
        let url = self.ideas_url(focus);
        tracing::debug!("Loading ideas from {}", url);
        let response = self.client.get(&url).send().await?;
        let body = self.read_body(response).await?;
        let inner = parse_envelope(&body)?;
        parse_ideas(&inner)
    }

    /// Like [`Self::try_fetch_ideas`], but a failure becomes an empty list
    /// with the error attached.
    pub async fn fetch_ideas(&self, focus: Option<&str>) -> IdeaList {
        match self.try_fetch_ideas(focus).await {
            Ok(ideas) => IdeaList { ideas, error: None },
            Err(e) => {
                tracing::warn!("Failed to load ideas: {}", e);
                IdeaList::failed(&e)
            }
        }
    }
}
