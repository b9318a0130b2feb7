//! Batch management API endpoints

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::types::RecordType;
use crate::server::routes::MessageResponse;
use crate::server::state::AppState;
use crate::storage::database::entities::batch;
use crate::utils::error::{Result, ServiceError};

/// Batch creation request payload
#[derive(Debug, Deserialize)]
pub struct CreateBatchRequest {
    /// Unique batch name
    pub batch_name: String,
    /// Type of records in this batch
    pub record_type: RecordType,
    /// Optional batch description
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateBatchRequest {
    fn validate(&self) -> Result<()> {
        if self.batch_name.is_empty() {
            return Err(ServiceError::Validation(
                "batch_name must not be empty".to_string(),
            ));
        }
        if self.batch_name.len() > 255 {
            return Err(ServiceError::Validation(
                "batch_name must not exceed 255 characters".to_string(),
            ));
        }
        Ok(())
    }
}

/// Batch response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    /// Batch identifier
    pub id: i32,
    /// Batch name
    pub batch_name: String,
    /// Record type classifier
    pub record_type: RecordType,
    /// Optional description
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
    /// Last update timestamp
    pub updated_at: Option<chrono::DateTime<chrono::FixedOffset>>,
}

impl TryFrom<batch::Model> for BatchResponse {
    type Error = ServiceError;

    fn try_from(model: batch::Model) -> Result<Self> {
        let record_type = model.parse_record_type()?;
        Ok(Self {
            id: model.id,
            batch_name: model.batch_name,
            record_type,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Create a new batch
/// POST /api/v1/batches
async fn create_batch(
    state: web::Data<AppState>,
    payload: web::Json<CreateBatchRequest>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    payload.validate()?;

    // Duplicate names are reported to the client, not surfaced as a
    // constraint violation from the storage layer.
    if state
        .storage
        .database
        .find_batch_by_name(&payload.batch_name)
        .await?
        .is_some()
    {
        return Err(ServiceError::Conflict(format!(
            "Batch with name '{}' already exists",
            payload.batch_name
        )));
    }

    let model = state
        .storage
        .database
        .create_batch(&payload.batch_name, payload.record_type, payload.description)
        .await?;

    info!("Created batch '{}' (id {})", model.batch_name, model.id);

    Ok(HttpResponse::Created().json(BatchResponse::try_from(model)?))
}

/// List all batches
/// GET /api/v1/batches
async fn list_batches(state: web::Data<AppState>) -> Result<HttpResponse> {
    let batches = state.storage.database.list_batches().await?;

    let responses: Vec<BatchResponse> = batches
        .into_iter()
        .map(BatchResponse::try_from)
        .collect::<Result<_>>()?;

    Ok(HttpResponse::Ok().json(responses))
}

/// Fetch a batch by ID
/// GET /api/v1/batches/{batch_id}
async fn get_batch(state: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
    let batch_id = path.into_inner();

    let batch = state
        .storage
        .database
        .find_batch_by_id(batch_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Batch with id {} not found", batch_id)))?;

    Ok(HttpResponse::Ok().json(BatchResponse::try_from(batch)?))
}

/// Delete a batch and all of its records
/// DELETE /api/v1/batches/{batch_id}
async fn delete_batch(state: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
    let batch_id = path.into_inner();

    let deleted = state.storage.database.delete_batch(batch_id).await?;
    if !deleted {
        return Err(ServiceError::NotFound(format!(
            "Batch with id {} not found",
            batch_id
        )));
    }

    info!("Deleted batch {}", batch_id);

    Ok(HttpResponse::Ok().json(MessageResponse::with_details(
        format!("Successfully deleted batch {}", batch_id),
        serde_json::json!({ "batch_id": batch_id }),
    )))
}

/// Configure batch endpoints
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/batches")
            .route("", web::post().to(create_batch))
            .route("", web::get().to(list_batches))
            .route("/{batch_id}", web::get().to(get_batch))
            .route("/{batch_id}", web::delete().to(delete_batch)),
    );
}
