//! Route definitions for the deals catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::deals;
use crate::state::AppState;

/// Deal routes, mounted at the root so paths match what the web frontend calls.
///
/// ```text
/// GET    /deals        -> list_deals
/// POST   /deals        -> create_deal
/// GET    /deals/       -> list_deals   (trailing-slash form)
/// POST   /deals/       -> create_deal  (trailing-slash form)
/// GET    /deals/{id}   -> get_deal
/// DELETE /deals/{id}   -> delete_deal
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/deals", get(deals::list_deals).post(deals::create_deal))
        .route("/deals/", get(deals::list_deals).post(deals::create_deal))
        .route("/deals/{id}", get(deals::get_deal).delete(deals::delete_deal))
}
