use crate::startup::AppState;
use axum::{Json, extract::State};
use serde_json::json;

/// Root status endpoint, kept for frontend compatibility.
pub async fn root_status() -> Json<serde_json::Value> {
    Json(json!({ "status": "Crack Bank API is running" }))
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "breach-service",
        "version": env!("CARGO_PKG_VERSION"),
        "dataset_entries": state.repository.len(),
    }))
}
