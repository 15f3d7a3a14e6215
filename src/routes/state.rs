use std::sync::Arc;

use crate::oracle::CorrectionOracle;
use crate::providers::ContentProvider;

/// Shared application state.
///
/// The provider (with its reusable HTTP client) and the correction oracle are
/// constructed once at startup and only read afterwards, so cloning the state
/// per request is two `Arc` bumps.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ContentProvider>,
    pub oracle: Arc<dyn CorrectionOracle>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ContentProvider>, oracle: Arc<dyn CorrectionOracle>) -> Self {
        Self { provider, oracle }
    }
}
