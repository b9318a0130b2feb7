use crate::core::types::RecordType;
use crate::utils::error::{Result, ServiceError};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, batch, record};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Create a new batch
    pub async fn create_batch(
        &self,
        batch_name: &str,
        record_type: RecordType,
        description: Option<String>,
    ) -> Result<batch::Model> {
        debug!("Creating batch: {}", batch_name);

        let active_model = batch::ActiveModel {
            batch_name: Set(batch_name.to_string()),
            record_type: Set(record_type.to_string()),
            description: Set(description),
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

    /// Find batch by ID
    pub async fn find_batch_by_id(&self, batch_id: i32) -> Result<Option<batch::Model>> {
        debug!("Finding batch by ID: {}", batch_id);

        entities::Batch::find_by_id(batch_id)
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// Find batch by name
    pub async fn find_batch_by_name(&self, batch_name: &str) -> Result<Option<batch::Model>> {
        debug!("Finding batch by name: {}", batch_name);

        entities::Batch::find()
            .filter(batch::Column::BatchName.eq(batch_name))
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// List all batches, oldest first
    pub async fn list_batches(&self) -> Result<Vec<batch::Model>> {
        debug!("Listing batches");

        entities::Batch::find()
            .order_by_asc(batch::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)
    }

    /// Delete a batch and all of its records
    ///
    /// Returns false if the batch did not exist. The child rows are removed
    /// in the same transaction as the batch itself.
    pub async fn delete_batch(&self, batch_id: i32) -> Result<bool> {
        debug!("Deleting batch: {}", batch_id);

        let txn = self.db.begin().await.map_err(ServiceError::Database)?;

        let Some(batch) = entities::Batch::find_by_id(batch_id)
            .one(&txn)
            .await
            .map_err(ServiceError::Database)?
        else {
            txn.rollback().await.map_err(ServiceError::Database)?;
            return Ok(false);
        };

        entities::Record::delete_many()
            .filter(record::Column::BatchId.eq(batch_id))
            .exec(&txn)
            .await
            .map_err(ServiceError::Database)?;

        batch.delete(&txn).await.map_err(ServiceError::Database)?;

        txn.commit().await.map_err(ServiceError::Database)?;

        Ok(true)
    }
}
