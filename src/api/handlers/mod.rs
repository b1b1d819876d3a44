use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Form, Json,
};
use serde::Deserialize;

use super::page::{render_page, Page};
use super::AppState;
use crate::client::{GenerateError, IdeaList};
use crate::export::{Export, ExportError};
use crate::models::FeatureRequest;
use crate::render::render;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Prefills the description box (set by picking an idea).
    pub description: Option<String>,
    pub focus: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IdeasQuery {
    pub focus: Option<String>,
}

/// Map a generation failure to the status the page is served with.
fn failure_status(e: &GenerateError) -> StatusCode {
    match e {
        GenerateError::EmptyInput => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Page
// ============================================================

pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let current = state.slot.current();
    // With a result on screen, ideas load only when asked for through the focus form.
    let ideas = if current.is_some() && query.focus.is_none() {
        IdeaList::default()
    } else {
        state.client.fetch_ideas(query.focus.as_deref()).await
    };
    let document = current.as_deref().map(render);

    Html(render_page(&Page {
        description: query.description.as_deref().unwrap_or_default(),
        focus: query.focus.as_deref().unwrap_or_default(),
        ideas: Some(&ideas),
        message: None,
        document: document.as_ref(),
        export_ready: current.is_some(),
    }))
}

pub async fn generate(
    State(state): State<AppState>,
    Form(request): Form<FeatureRequest>,
) -> (StatusCode, Html<String>) {
    tracing::debug!("Received generate request: {:?}", request.description);

    match state.client.generate_request(&request).await {
        Ok(result) => {
            let document = state.slot.publish(result);
            let html = render_page(&Page {
                description: &request.description,
                focus: "",
                ideas: None,
                message: None,
                document: Some(&document),
                export_ready: true,
            });
            (StatusCode::OK, Html(html))
        }
        Err(e) => {
            match &e {
                GenerateError::EmptyInput => tracing::debug!("Rejected blank description"),
                other => tracing::warn!("Generation failed: {}", other),
            }
            let message = e.user_message();
            let html = render_page(&Page {
                description: &request.description,
                focus: "",
                ideas: None,
                message: Some(&message),
                document: None,
                export_ready: state.slot.is_ready(),
            });
            (failure_status(&e), Html(html))
        }
    }
}

// ============================================================
// Ideas
// ============================================================

pub async fn ideas(
    State(state): State<AppState>,
    Query(query): Query<IdeasQuery>,
) -> Json<IdeaList> {
    Json(state.client.fetch_ideas(query.focus.as_deref()).await)
}

// ============================================================
// Export
// ============================================================

pub async fn export(State(state): State<AppState>) -> Result<Export, ExportError> {
    let current = state.slot.current();
    Export::from_current(current.as_deref())
}
