//! Application state for the web layer.

use std::sync::Arc;

use crate::tanker::TankerClient;

/// Shared application state.
///
/// The client is stateless and immutable, so handlers running
/// concurrently share one instance behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Price API client
    pub tanker: Arc<TankerClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(tanker: TankerClient) -> Self {
        Self {
            tanker: Arc::new(tanker),
        }
    }
}
