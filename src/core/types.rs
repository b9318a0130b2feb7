//! Domain types shared across the service
//!
//! Status and record-type classifiers are closed sum types. They are stored
//! as lowercase strings in the database and on the wire; parsing back out is
//! fallible so an unknown string can never masquerade as a valid state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Processing status of a record within a batch
///
/// A record is registered either as something the pipeline should eventually
/// process or as something it did process. There is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Registered as something the pipeline should process
    Expected,
    /// Registered as something the pipeline did process
    Processed,
}

impl RecordStatus {
    /// String form used for storage and wire encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Expected => "expected",
            RecordStatus::Processed => "processed",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expected" => Ok(RecordStatus::Expected),
            "processed" => Ok(RecordStatus::Processed),
            other => Err(format!("invalid record status: {other}")),
        }
    }
}

/// Kind of record tracked by a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// Customer order
    Order,
    /// Financial transaction
    Transaction,
    /// File transfer
    File,
    /// Shipment
    Shipment,
    /// Payment
    Payment,
}

impl RecordType {
    /// String form used for storage and wire encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Order => "order",
            RecordType::Transaction => "transaction",
            RecordType::File => "file",
            RecordType::Shipment => "shipment",
            RecordType::Payment => "payment",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order" => Ok(RecordType::Order),
            "transaction" => Ok(RecordType::Transaction),
            "file" => Ok(RecordType::File),
            "shipment" => Ok(RecordType::Shipment),
            "payment" => Ok(RecordType::Payment),
            other => Err(format!("invalid record type: {other}")),
        }
    }
}

/// A record to be inserted into a batch
///
/// Used both for single creation and for bulk uploads. The domain record id
/// carries no uniqueness constraint: the same id legitimately appears once
/// per pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    /// Domain identifier of the record to track
    pub record_id: i64,
    /// Pipeline stage this row registers
    pub status: RecordStatus,
    /// Optional free-text metadata
    #[serde(default)]
    pub record_metadata: Option<String>,
}
