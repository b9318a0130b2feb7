use crate::core::types::{NewRecord, RecordStatus};
use crate::utils::error::{Result, ServiceError};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, record};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Create a single record for a batch
    pub async fn create_record(&self, batch_id: i32, new_record: &NewRecord) -> Result<record::Model> {
        debug!(
            "Creating record {} ({}) for batch {}",
            new_record.record_id, new_record.status, batch_id
        );

        let active_model = record::ActiveModel {
            record_id: Set(new_record.record_id),
            batch_id: Set(batch_id),
            status: Set(new_record.status.to_string()),
            record_metadata: Set(new_record.record_metadata.clone()),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(model)
    }

    /// Bulk create records for a batch
    ///
    /// The rows go in via a single insert statement, so the upload is
    /// all-or-nothing. Returns the number of inserted rows.
    pub async fn bulk_create_records(&self, batch_id: i32, records: &[NewRecord]) -> Result<u64> {
        debug!("Bulk creating {} records for batch {}", records.len(), batch_id);

        if records.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now();
        let active_models: Vec<record::ActiveModel> = records
            .iter()
            .map(|new_record| record::ActiveModel {
                record_id: Set(new_record.record_id),
                batch_id: Set(batch_id),
                status: Set(new_record.status.to_string()),
                record_metadata: Set(new_record.record_metadata.clone()),
                created_at: Set(now.into()),
                updated_at: Set(None),
                ..Default::default()
            })
            .collect();

        entities::Record::insert_many(active_models)
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(records.len() as u64)
    }

    /// List all records for a batch, oldest first
    pub async fn list_records(&self, batch_id: i32) -> Result<Vec<record::Model>> {
        debug!("Listing records for batch {}", batch_id);

        entities::Record::find()
            .filter(record::Column::BatchId.eq(batch_id))
            .order_by_asc(record::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// List records with a given status for a batch
    pub async fn list_records_by_status(
        &self,
        batch_id: i32,
        status: RecordStatus,
    ) -> Result<Vec<record::Model>> {
        debug!("Listing {} records for batch {}", status, batch_id);

        entities::Record::find()
            .filter(record::Column::BatchId.eq(batch_id))
            .filter(record::Column::Status.eq(status.as_str()))
            .order_by_asc(record::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// List the domain record identifiers with a given status for a batch
    ///
    /// Returns raw rows: duplicates are preserved and the order follows
    /// storage iteration. Callers decide between row and set semantics.
    pub async fn list_record_ids(&self, batch_id: i32, status: RecordStatus) -> Result<Vec<i64>> {
        debug!("Listing {} record ids for batch {}", status, batch_id);

        entities::Record::find()
            .select_only()
            .column(record::Column::RecordId)
            .filter(record::Column::BatchId.eq(batch_id))
            .filter(record::Column::Status.eq(status.as_str()))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// Count all records for a batch, regardless of status
    pub async fn count_records(&self, batch_id: i32) -> Result<u64> {
        entities::Record::find()
            .filter(record::Column::BatchId.eq(batch_id))
            .count(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// Count records with a given status for a batch
    pub async fn count_records_by_status(
        &self,
        batch_id: i32,
        status: RecordStatus,
    ) -> Result<u64> {
        entities::Record::find()
            .filter(record::Column::BatchId.eq(batch_id))
            .filter(record::Column::Status.eq(status.as_str()))
            .count(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// Delete all records for a batch
    ///
    /// Returns the number of deleted rows.
    pub async fn clear_records(&self, batch_id: i32) -> Result<u64> {
        debug!("Clearing records for batch {}", batch_id);

        let result = entities::Record::delete_many()
            .filter(record::Column::BatchId.eq(batch_id))
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(result.rows_affected)
    }
}
