mod handlers;
mod page;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::client::GeneratorClient;
use crate::slot::ResultSlot;

pub use page::{render_page, Page};

/// Shared state for the view server.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: GeneratorClient,
    pub slot: ResultSlot,
}

impl AppState {
    pub fn new(client: GeneratorClient) -> Self {
        Self {
            client,
            slot: ResultSlot::new(),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        // Ideas
        .route("/ideas", get(handlers::ideas))
        // Export
        .route("/export", get(handlers::export))
        // Health
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
