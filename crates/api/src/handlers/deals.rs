//! Handlers for the deals catalog.
//!
//! Request bodies and query strings are extracted as `Result`s so that
//! malformed input is reported through [`AppError`] in the same JSON shape as
//! every other error, instead of axum's plain-text rejections.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use dealmyarea_core::deal::{CreateDeal, DEAL_ENTITY};
use dealmyarea_core::deal_query::{filter_and_sort, DealListParams};
use dealmyarea_core::error::CoreError;
use dealmyarea_core::types::DealId;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /deals
///
/// List deals, optionally filtered by category, store, price bounds and
/// distance, sorted by any deal field. Defaults to newest first.
pub async fn list_deals(
    State(state): State<AppState>,
    params: Result<Query<DealListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let deals = filter_and_sort(&state.store.list(), params)?;

    tracing::debug!(count = deals.len(), "Deals listed");

    Ok(Json(deals))
}

/// POST /deals
///
/// Create a deal. The store assigns `id` and `created_at`.
pub async fn create_deal(
    State(state): State<AppState>,
    payload: Result<Json<CreateDeal>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.check()?;

    let deal = state.store.append(input);

    tracing::info!(deal_id = %deal.id, category = %deal.category, "Deal created");

    Ok((StatusCode::CREATED, Json(deal)))
}

/// GET /deals/{id}
pub async fn get_deal(
    State(state): State<AppState>,
    Path(deal_id): Path<DealId>,
) -> AppResult<impl IntoResponse> {
    let deal = state
        .store
        .find_by_id(&deal_id)
        .ok_or_else(|| not_found(deal_id))?;

    Ok(Json(deal))
}

/// DELETE /deals/{id}
pub async fn delete_deal(
    State(state): State<AppState>,
    Path(deal_id): Path<DealId>,
) -> AppResult<impl IntoResponse> {
    if state.store.remove_by_id(&deal_id).is_none() {
        return Err(not_found(deal_id));
    }

    tracing::info!(deal_id = %deal_id, "Deal deleted");

    Ok(Json(MessageResponse {
        message: "Deal deleted successfully",
    }))
}

fn not_found(id: DealId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: DEAL_ENTITY,
        id,
    })
}
