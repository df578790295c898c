use std::sync::Arc;

use crate::config::Config;
use crate::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable job repository. Production uses the file-backed store.
    pub store: Arc<dyn JobStore>,
    pub config: Config,
}
