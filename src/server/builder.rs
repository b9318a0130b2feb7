//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for programmatic configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, ServiceError};
use tracing::info;

/// Default configuration file location
const CONFIG_PATH: &str = "config/recontrack.yaml";

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
///
/// Tries the config file first; when it is absent or unreadable the
/// configuration is assembled from defaults and environment variables.
pub async fn run_server() -> Result<()> {
    info!("Starting pipeline record reconciliation service");

    info!("Loading configuration file: {}", CONFIG_PATH);
    let config = match Config::from_file(CONFIG_PATH).await {
        Ok(config) => {
            info!("Configuration file loaded successfully");
            config
        }
        Err(e) => {
            info!(
                "Configuration file unavailable ({}), using defaults and environment",
                e
            );
            Config::from_env()?
        }
    };

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API endpoints:");
    info!("   GET    /health - Health check");
    info!("   POST   /api/v1/batches - Create batch");
    info!("   POST   /api/v1/records/bulk - Bulk upload records");
    info!("   GET    /api/v1/analysis/missing/{{batch_id}} - Reconciliation result");

    server.start().await
}
