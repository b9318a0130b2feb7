//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::services::ReconciliationService;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for cheap cloning into the per-worker app
/// instances.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Reconciliation service
    pub reconciliation: Arc<ReconciliationService>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, storage: StorageLayer) -> Self {
        let storage = Arc::new(storage);
        let reconciliation = Arc::new(ReconciliationService::new(Arc::clone(&storage)));

        Self {
            config: Arc::new(config),
            storage,
            reconciliation,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
