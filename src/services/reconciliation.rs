//! Reconciliation service
//!
//! Reads a batch's rows, feeds the identifier collections through the
//! reconciliation engine and shapes the three analysis views. All methods
//! are read-only: nothing here mutates stored state, and a result always
//! reflects whatever rows were visible at read time.

use std::sync::Arc;
use tracing::debug;

use crate::core::reconciliation::{
    BatchStatistics, MissingRecordsResult, ProcessingStatusResult, compare_id_sets,
};
use crate::core::types::RecordStatus;
use crate::storage::StorageLayer;
use crate::storage::database::entities::batch;
use crate::utils::error::{Result, ServiceError};

/// Service computing reconciliation views over a batch
pub struct ReconciliationService {
    storage: Arc<StorageLayer>,
}

impl ReconciliationService {
    /// Create a new reconciliation service
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    /// Look the batch up, failing fast before any set computation
    async fn require_batch(&self, batch_id: i32) -> Result<batch::Model> {
        self.storage
            .database
            .find_batch_by_id(batch_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Batch with id {} not found", batch_id)))
    }

    /// Compute the full reconciliation result for a batch
    ///
    /// Missing = expected − processed, unexpected = processed − expected,
    /// both ascending sorted; the rate is the processed share of the
    /// distinct expected identifiers.
    pub async fn missing_records(&self, batch_id: i32) -> Result<MissingRecordsResult> {
        let batch = self.require_batch(batch_id).await?;

        let expected = self
            .storage
            .database
            .list_record_ids(batch_id, RecordStatus::Expected)
            .await?;
        let processed = self
            .storage
            .database
            .list_record_ids(batch_id, RecordStatus::Processed)
            .await?;

        let comparison = compare_id_sets(&expected, &processed);
        debug!(
            "Reconciled batch {}: {} missing, {} unexpected",
            batch_id,
            comparison.missing.len(),
            comparison.unexpected.len()
        );

        Ok(MissingRecordsResult::new(
            batch.id,
            batch.batch_name,
            comparison,
        ))
    }

    /// List all expected and processed identifiers for a batch
    ///
    /// Transparent row listing: sorted, duplicates preserved, counts count
    /// rows.
    pub async fn processing_status(&self, batch_id: i32) -> Result<ProcessingStatusResult> {
        let batch = self.require_batch(batch_id).await?;
        let record_type = batch.parse_record_type()?;

        let mut expected = self
            .storage
            .database
            .list_record_ids(batch_id, RecordStatus::Expected)
            .await?;
        let mut processed = self
            .storage
            .database
            .list_record_ids(batch_id, RecordStatus::Processed)
            .await?;

        expected.sort_unstable();
        processed.sort_unstable();

        let expected_count = expected.len();
        let processed_count = processed.len();

        Ok(ProcessingStatusResult {
            batch_id: batch.id,
            batch_name: batch.batch_name,
            record_type,
            expected_records: expected,
            processed_records: processed,
            expected_count,
            processed_count,
        })
    }

    /// Compute aggregate statistics for a batch
    ///
    /// `total_records`, `expected_count` and `processed_count` count rows;
    /// `missing_count` and `processing_rate` come from the deduplicated
    /// sets. Duplicate rows under one status make the row counts exceed the
    /// set cardinalities, and that difference is part of the contract.
    pub async fn batch_statistics(&self, batch_id: i32) -> Result<BatchStatistics> {
        let batch = self.require_batch(batch_id).await?;

        let total_records = self.storage.database.count_records(batch_id).await?;
        let expected_count = self
            .storage
            .database
            .count_records_by_status(batch_id, RecordStatus::Expected)
            .await?;
        let processed_count = self
            .storage
            .database
            .count_records_by_status(batch_id, RecordStatus::Processed)
            .await?;

        let expected = self
            .storage
            .database
            .list_record_ids(batch_id, RecordStatus::Expected)
            .await?;
        let processed = self
            .storage
            .database
            .list_record_ids(batch_id, RecordStatus::Processed)
            .await?;

        let comparison = compare_id_sets(&expected, &processed);

        Ok(BatchStatistics {
            batch_id: batch.id,
            batch_name: batch.batch_name,
            total_records,
            expected_count,
            processed_count,
            missing_count: comparison.missing.len(),
            processing_rate: comparison.processing_rate,
        })
    }
}
