//! Application state shared across handlers

use std::sync::Arc;

use integration_cwa::CwaClient;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Upstream forecast client
    pub forecasts: Arc<CwaClient>,
}
