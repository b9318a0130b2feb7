//! Core domain logic
//!
//! This module contains the domain types and the reconciliation engine. It is
//! free of transport and persistence concerns: everything here operates on
//! plain values and can be exercised without a database.

pub mod reconciliation;
pub mod types;

pub use reconciliation::{BatchStatistics, MissingRecordsResult, ProcessingStatusResult, SetComparison};
pub use types::{NewRecord, RecordStatus, RecordType};
