use std::sync::Arc;

use dealmyarea_db::DealStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The deal store, chosen by the composition root.
    pub store: Arc<dyn DealStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DealStore>) -> Self {
        Self { store }
    }
}
