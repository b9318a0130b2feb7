//! Record reconciliation engine
//!
//! Pure set computation over two identifier collections: the records a batch
//! expected to see and the records it actually processed. Storage rows are
//! not assumed unique; both inputs are deduplicated into true sets before
//! any difference or intersection is taken. Output sequences are ascending
//! sorted so results are reproducible regardless of storage iteration order.
//!
//! Nothing in this module performs I/O; batch lookup and row reads happen in
//! [`crate::services::reconciliation`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::types::RecordType;

/// Outcome of comparing a batch's expected and processed identifier sets
#[derive(Debug, Clone, PartialEq)]
pub struct SetComparison {
    /// Number of distinct expected identifiers
    pub expected_count: usize,
    /// Number of distinct processed identifiers
    pub processed_count: usize,
    /// Expected identifiers never processed, ascending
    pub missing: Vec<i64>,
    /// Processed identifiers never expected, ascending
    pub unexpected: Vec<i64>,
    /// Distinct identifiers present in both sets
    pub matched_count: usize,
    /// Percentage of expected identifiers that were processed, rounded to
    /// two decimal places; exactly 0.0 when nothing was expected
    pub processing_rate: f64,
}

/// Compare the expected and processed identifier collections of a batch.
///
/// Duplicate rows with the same identifier and status collapse to a single
/// set member. `missing` is the set difference expected − processed,
/// `unexpected` the reverse difference.
pub fn compare_id_sets(expected_rows: &[i64], processed_rows: &[i64]) -> SetComparison {
    let expected: BTreeSet<i64> = expected_rows.iter().copied().collect();
    let processed: BTreeSet<i64> = processed_rows.iter().copied().collect();

    // BTreeSet iteration is ordered, so the differences come out ascending.
    let missing: Vec<i64> = expected.difference(&processed).copied().collect();
    let unexpected: Vec<i64> = processed.difference(&expected).copied().collect();
    let matched_count = expected.intersection(&processed).count();

    let processing_rate = if expected.is_empty() {
        0.0
    } else {
        round2(matched_count as f64 / expected.len() as f64 * 100.0)
    };

    SetComparison {
        expected_count: expected.len(),
        processed_count: processed.len(),
        missing,
        unexpected,
        matched_count,
        processing_rate,
    }
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Full reconciliation result for a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingRecordsResult {
    /// Batch identifier
    pub batch_id: i32,
    /// Batch name
    pub batch_name: String,
    /// Distinct expected identifiers
    pub total_expected: usize,
    /// Distinct processed identifiers
    pub total_processed: usize,
    /// Number of missing identifiers
    pub missing_count: usize,
    /// Expected identifiers never processed, ascending
    pub missing_records: Vec<i64>,
    /// Percentage of expected identifiers that were processed
    pub processing_rate: f64,
    /// Number of unexpected identifiers
    pub unexpected_count: usize,
    /// Processed identifiers never expected, ascending
    pub unexpected_records: Vec<i64>,
}

impl MissingRecordsResult {
    /// Assemble the wire result from a batch and its set comparison
    pub fn new(batch_id: i32, batch_name: String, comparison: SetComparison) -> Self {
        Self {
            batch_id,
            batch_name,
            total_expected: comparison.expected_count,
            total_processed: comparison.processed_count,
            missing_count: comparison.missing.len(),
            missing_records: comparison.missing,
            processing_rate: comparison.processing_rate,
            unexpected_count: comparison.unexpected.len(),
            unexpected_records: comparison.unexpected,
        }
    }
}

/// Processing status listing for a batch
///
/// A transparent projection of the stored rows: identifiers are sorted but
/// duplicates are NOT collapsed, and the counts count rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingStatusResult {
    /// Batch identifier
    pub batch_id: i32,
    /// Batch name
    pub batch_name: String,
    /// Record type classifier of the batch
    pub record_type: RecordType,
    /// All expected identifiers, ascending
    pub expected_records: Vec<i64>,
    /// All processed identifiers, ascending
    pub processed_records: Vec<i64>,
    /// Number of expected rows
    pub expected_count: usize,
    /// Number of processed rows
    pub processed_count: usize,
}

/// Aggregate statistics for a batch
///
/// `total_records`, `expected_count` and `processed_count` count storage
/// rows; `missing_count` and `processing_rate` are derived from the
/// deduplicated identifier sets. The mixture is intentional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStatistics {
    /// Batch identifier
    pub batch_id: i32,
    /// Batch name
    pub batch_name: String,
    /// Total stored rows for the batch, any status
    pub total_records: u64,
    /// Stored rows with status expected
    pub expected_count: u64,
    /// Stored rows with status processed
    pub processed_count: u64,
    /// Distinct expected identifiers never processed
    pub missing_count: usize,
    /// Percentage of distinct expected identifiers that were processed
    pub processing_rate: f64,
}
