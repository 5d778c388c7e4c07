//! Liveness and readiness probes.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Liveness check. Answers as long as the process is serving.
pub async fn live() -> &'static str {
    "ok"
}

/// Readiness check. Ready once the catalog has products to serve.
pub async fn ready(State(state): State<AppState>) -> Result<&'static str, (StatusCode, &'static str)> {
    if state.catalog().is_empty() {
        tracing::warn!("Readiness check failed: catalog is empty");
        return Err((StatusCode::SERVICE_UNAVAILABLE, "catalog not loaded"));
    }
    Ok("ok")
}
