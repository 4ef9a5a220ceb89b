use std::sync::Arc;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the NLP sidecar is reachable.
    pub classifier_reachable: bool,
}

/// GET /health -- returns service and classifier sidecar health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let classifier = Arc::clone(&state.classifier);
    // The probe is a blocking HTTP call.
    let classifier_reachable = tokio::task::spawn_blocking(move || classifier.is_reachable())
        .await
        .unwrap_or(false);

    let status = if classifier_reachable { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        classifier_reachable,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
