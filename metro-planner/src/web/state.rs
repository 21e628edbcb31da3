//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;

/// Shared application state.
///
/// The network is immutable once the server starts, so handlers share it
/// without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The network every query is answered against.
    pub network: Arc<Network>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
