#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use epicgen::models::{AcceptanceCriterion, FeatureResult, Idea, Story};
use serde_json::{json, Value};

/// What the fake backend answers and what it saw.
#[derive(Clone)]
pub struct Backend {
    pub generate_status: StatusCode,
    pub generate_body: String,
    pub ideas_status: StatusCode,
    pub ideas_body: String,
    pub seen: Arc<Mutex<Seen>>,
}

#[derive(Debug, Default)]
pub struct Seen {
    pub generate_bodies: Vec<Value>,
    pub idea_queries: Vec<Option<String>>,
}

impl Backend {
    pub fn new() -> Self {
        Self {
            generate_status: StatusCode::OK,
            generate_body: envelope(&serde_json::to_string(&sample_result()).unwrap()),
            ideas_status: StatusCode::OK,
            ideas_body: envelope(&serde_json::to_string(&sample_ideas()).unwrap()),
            seen: Arc::default(),
        }
    }

    pub fn generate_returns(mut self, status: StatusCode, body: impl Into<String>) -> Self {
        self.generate_status = status;
        self.generate_body = body.into();
        self
    }

    pub fn ideas_return(mut self, status: StatusCode, body: impl Into<String>) -> Self {
        self.ideas_status = status;
        self.ideas_body = body.into();
        self
    }

    pub fn generate_calls(&self) -> usize {
        self.seen.lock().unwrap().generate_bodies.len()
    }

    pub fn idea_queries(&self) -> Vec<Option<String>> {
        self.seen.lock().unwrap().idea_queries.clone()
    }

    pub fn last_generate_body(&self) -> Option<Value> {
        self.seen.lock().unwrap().generate_bodies.last().cloned()
    }

    /// Serve on an ephemeral local port and return the base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/api/generate", post(generate))
            .route("/api/generate-ideas", get(ideas))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake backend crashed");
        });
        format!("http://{}", addr)
    }
}

async fn generate(State(backend): State<Backend>, Json(body): Json<Value>) -> impl IntoResponse {
    backend.seen.lock().unwrap().generate_bodies.push(body);
    (backend.generate_status, backend.generate_body.clone())
}

async fn ideas(State(backend): State<Backend>, RawQuery(query): RawQuery) -> impl IntoResponse {
    backend.seen.lock().unwrap().idea_queries.push(query);
    (backend.ideas_status, backend.ideas_body.clone())
}

/// A URL nothing listens on.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

pub fn envelope(inner: &str) -> String {
    json!({ "result": inner }).to_string()
}

pub fn sample_result() -> FeatureResult {
    FeatureResult {
        epic_title: "Login".to_string(),
        description: "Let users sign in".to_string(),
        rationale: "Accounts need protecting".to_string(),
        long_description: "Email and password sign-in with lockout".to_string(),
        stories: vec![
            Story {
                story_title: "Sign in with email".to_string(),
                description: "Email and password form".to_string(),
                agile_story: "As a user I want to sign in so that I see my data".to_string(),
                purpose: "Access".to_string(),
                rationale: "Most users have an email".to_string(),
                acceptance_criteria: vec![
                    AcceptanceCriterion {
                        criteria: "works".to_string(),
                        test_criteria: vec!["t1".to_string(), "t2".to_string()],
                    },
                    AcceptanceCriterion {
                        criteria: "rejects bad passwords".to_string(),
                        test_criteria: vec![],
                    },
                ],
                technical_considerations: vec!["Hash with argon2".to_string()],
            },
            Story {
                story_title: "Lock out after failures".to_string(),
                description: "Five strikes".to_string(),
                agile_story: "As an admin I want lockouts".to_string(),
                purpose: "Security".to_string(),
                rationale: "Brute force".to_string(),
                acceptance_criteria: vec![],
                technical_considerations: vec![],
            },
        ],
    }
}

pub fn sample_ideas() -> Vec<Idea> {
    vec![
        Idea {
            short_title: "Invoices".to_string(),
            long_description: "Send monthly invoices to customers".to_string(),
        },
        Idea {
            short_title: "Refunds".to_string(),
            long_description: "Let support staff issue refunds".to_string(),
        },
    ]
}
