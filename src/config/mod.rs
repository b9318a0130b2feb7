//! Configuration management for the reconciliation service
//!
//! This module handles loading and validation of the service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServiceError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Build configuration from defaults plus environment variables
    ///
    /// Recognized variables: `RECONTRACK_HOST`, `RECONTRACK_PORT`,
    /// `DATABASE_URL`.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(host) = std::env::var("RECONTRACK_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("RECONTRACK_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| ServiceError::Config(format!("Invalid RECONTRACK_PORT: {}", port)))?;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.storage.database.url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| ServiceError::Config(format!("Server config error: {}", e)))?;

        self.server
            .cors
            .validate()
            .map_err(|e| ServiceError::Config(format!("CORS config error: {}", e)))?;

        self.storage
            .validate()
            .map_err(|e| ServiceError::Config(format!("Storage config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}
