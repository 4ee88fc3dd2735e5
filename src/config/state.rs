// Application state module
// Immutable settings plus the catalog provider shared by all connections

use std::sync::Arc;

use super::types::Config;
use crate::catalog::{CatalogProvider, StaticCatalog};

/// Application state
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn CatalogProvider>,
}

impl AppState {
    /// Create `AppState` backed by the built-in static catalog
    pub fn new(config: Config) -> Self {
        let catalog = Arc::new(StaticCatalog::from_config(&config));
        Self::with_catalog(config, catalog)
    }

    /// Create `AppState` with a caller-supplied catalog provider
    pub fn with_catalog(config: Config, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { config, catalog }
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
