use std::sync::Arc;

use crate::config::Config;
use crate::registry::SatelliteStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Satellite positions and latest readings. Default: InMemoryStore.
    pub store: Arc<dyn SatelliteStore>,
}
