use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    /// Which recognizer answers the name fallback: "rules" or "llm".
    pub ner_backend: &'static str,
    pub skills_loaded: usize,
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        service: env!("CARGO_PKG_NAME"),
        ner_backend: state.parser.recognizer_backend(),
        skills_loaded: state.skills.len(),
    })
}
