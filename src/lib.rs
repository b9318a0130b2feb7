//! # recontrack
//!
//! Pipeline record tracking and reconciliation service.
//!
//! Records flow through a data pipeline in two stages, registered as
//! *expected* and later observed as *processed*, grouped into named batches.
//! The reconciliation engine compares the two identifier sets of a batch and
//! reports which expected records never showed up (missing), which processed
//! records were never announced (unexpected), and the resulting processing
//! rate.
//!
//! ## Components
//!
//! - **HTTP API** (actix-web): batch and record CRUD plus the analysis
//!   endpoints, mounted under `/api/v1`.
//! - **Reconciliation engine** ([`crate::core::reconciliation`]): pure set
//!   computation, independently testable without a database.
//! - **Storage** (SeaORM): SQLite by default, PostgreSQL via the `postgres`
//!   feature.
//!
//! ## Running
//!
//! ```bash
//! # Start the service (auto-loads config/recontrack.yaml)
//! cargo run
//!
//! # Load demo data and print a reconciliation summary
//! cargo run --bin seed
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use crate::config::Config;
pub use crate::core::reconciliation::{
    BatchStatistics, MissingRecordsResult, ProcessingStatusResult, SetComparison, compare_id_sets,
};
pub use crate::core::types::{NewRecord, RecordStatus, RecordType};
pub use crate::utils::error::{Result, ServiceError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
