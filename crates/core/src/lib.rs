//! Domain logic for the DealmyArea deals service.
//!
//! Pure types and functions only: the deal model and its validation rules,
//! great-circle distance, and the list query engine. Storage lives in
//! `dealmyarea-db`, HTTP in `dealmyarea-api`.

pub mod deal;
pub mod deal_query;
pub mod error;
pub mod geo;
pub mod types;
