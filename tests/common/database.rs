//! Test database utilities
//!
//! Provides in-memory SQLite databases for testing without external
//! dependencies. Each call creates a completely isolated instance.

use actix_web::web;
use recontrack::config::{Config, DatabaseConfig, StorageConfig};
use recontrack::server::state::AppState;
use recontrack::storage::StorageLayer;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Clone)]
pub struct TestDatabase {
    storage: Arc<StorageLayer>,
}

impl TestDatabase {
    /// Create a new in-memory test database
    ///
    /// In-memory SQLite requires max_connections = 1: a second connection
    /// would see its own empty database.
    pub async fn new() -> Self {
        let storage = StorageLayer::new(&test_storage_config())
            .await
            .expect("Failed to create in-memory test database");

        storage
            .migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            storage: Arc::new(storage),
        }
    }

    /// Get reference to the storage layer
    pub fn storage(&self) -> &StorageLayer {
        &self.storage
    }

    /// Get Arc to the storage layer
    pub fn storage_arc(&self) -> Arc<StorageLayer> {
        Arc::clone(&self.storage)
    }
}

/// Storage config pointing at an isolated in-memory database
pub fn test_storage_config() -> StorageConfig {
    StorageConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connection_timeout: 5,
        },
    }
}

/// Build an application state backed by a fresh in-memory database
pub async fn test_state() -> web::Data<AppState> {
    let config = Config {
        storage: test_storage_config(),
        ..Default::default()
    };

    let storage = StorageLayer::new(&config.storage)
        .await
        .expect("Failed to create in-memory test database");
    storage.migrate().await.expect("Failed to run migrations");

    web::Data::new(AppState::new(config, storage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.storage().health_check().await.is_ok());
    }
}
