//! Service metadata endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub deal_count: usize,
}

/// GET /
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to DealmyArea API",
    })
}

/// GET /health
///
/// Liveness check. Also reports how many deals the store currently holds.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        deal_count: state.store.len(),
    })
}
