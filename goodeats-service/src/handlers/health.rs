use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "goodeats-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: the text provider must be configured.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.text_provider.health_check().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Text provider not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
