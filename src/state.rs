//! Shared application state for all routes.

use crate::store::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Backend injected at startup; handlers never name a concrete store.
    pub store: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        AppState { store }
    }
}
