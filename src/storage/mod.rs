//! Storage layer for the reconciliation service
//!
//! This module provides data persistence via the database backend.

/// Database storage module
pub mod database;

use crate::config::StorageConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Main storage layer that owns the persistence backends
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);

        info!("Storage layer initialized successfully");

        Ok(Self { database })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations");
        self.database.migrate().await?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Health check for the storage backends
    pub async fn health_check(&self) -> Result<()> {
        self.database.health_check().await
    }
}
