pub mod deals;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /                 welcome message
/// /health           liveness + deal count
/// /deals            list, create
/// /deals/{id}       get, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(health::router()).merge(deals::router())
}
