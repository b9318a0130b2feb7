//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod analysis;
pub mod batches;
pub mod health;
pub mod records;

use actix_web::web;

/// Simple message response for deletes and bulk operations
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome message
    pub message: String,
    /// Additional structured detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl MessageResponse {
    /// Create a message response without details
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Create a message response with structured details
    pub fn with_details(message: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Configure the full API surface
///
/// Used by the server assembly and by the integration tests so both always
/// mount the same routes.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    batches::configure_routes(cfg);
    records::configure_routes(cfg);
    analysis::configure_routes(cfg);
}
