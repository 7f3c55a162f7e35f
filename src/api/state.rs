//! Shared state for the Web API server.

use std::sync::Arc;

use crate::storage::TaskStore;

/// Application state injected into every handler.
///
/// Holds the task store behind an `Arc`; axum clones the state per request,
/// so the clone has to stay cheap. No other state crosses requests — every
/// handler fetches fresh rows from the store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TaskStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }
}
