//! Record management API endpoints

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::types::{NewRecord, RecordStatus};
use crate::server::routes::MessageResponse;
use crate::server::state::AppState;
use crate::storage::database::entities::record;
use crate::utils::error::{Result, ServiceError};

/// Query parameters for single record creation
#[derive(Debug, Deserialize)]
pub struct BatchIdQuery {
    /// Batch the record belongs to
    pub batch_id: i32,
}

/// Bulk upload request payload
#[derive(Debug, Deserialize)]
pub struct BulkUploadRequest {
    /// Batch to add records to
    pub batch_id: i32,
    /// Records to insert
    pub records: Vec<NewRecord>,
}

/// Record response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    /// Row identifier
    pub id: i32,
    /// Domain record identifier
    pub record_id: i64,
    /// Owning batch
    pub batch_id: i32,
    /// Pipeline stage
    pub status: RecordStatus,
    /// Optional metadata
    pub record_metadata: Option<String>,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
    /// Last update timestamp
    pub updated_at: Option<chrono::DateTime<chrono::FixedOffset>>,
}

impl TryFrom<record::Model> for RecordResponse {
    type Error = ServiceError;

    fn try_from(model: record::Model) -> Result<Self> {
        let status = model.parse_status()?;
        Ok(Self {
            id: model.id,
            record_id: model.record_id,
            batch_id: model.batch_id,
            status,
            record_metadata: model.record_metadata,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Fail with not-found unless the batch exists
async fn require_batch(state: &AppState, batch_id: i32) -> Result<()> {
    state
        .storage
        .database
        .find_batch_by_id(batch_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Batch with id {} not found", batch_id)))?;
    Ok(())
}

/// Create a single record
/// POST /api/v1/records?batch_id=
async fn create_record(
    state: web::Data<AppState>,
    query: web::Query<BatchIdQuery>,
    payload: web::Json<NewRecord>,
) -> Result<HttpResponse> {
    let batch_id = query.batch_id;
    require_batch(&state, batch_id).await?;

    let model = state
        .storage
        .database
        .create_record(batch_id, &payload)
        .await?;

    Ok(HttpResponse::Created().json(RecordResponse::try_from(model)?))
}

/// Bulk upload records
/// POST /api/v1/records/bulk
async fn bulk_upload_records(
    state: web::Data<AppState>,
    payload: web::Json<BulkUploadRequest>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    require_batch(&state, payload.batch_id).await?;

    let count = state
        .storage
        .database
        .bulk_create_records(payload.batch_id, &payload.records)
        .await?;

    info!("Uploaded {} records to batch {}", count, payload.batch_id);

    Ok(HttpResponse::Created().json(MessageResponse::with_details(
        format!("Successfully uploaded {} records", count),
        serde_json::json!({ "count": count, "batch_id": payload.batch_id }),
    )))
}

/// List all records for a batch
/// GET /api/v1/records/batch/{batch_id}
async fn list_records(state: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
    let batch_id = path.into_inner();
    require_batch(&state, batch_id).await?;

    let records = state.storage.database.list_records(batch_id).await?;

    let responses: Vec<RecordResponse> = records
        .into_iter()
        .map(RecordResponse::try_from)
        .collect::<Result<_>>()?;

    Ok(HttpResponse::Ok().json(responses))
}

/// List records with a given status for a batch
/// GET /api/v1/records/batch/{batch_id}/status/{status}
async fn list_records_by_status(
    state: web::Data<AppState>,
    path: web::Path<(i32, String)>,
) -> Result<HttpResponse> {
    let (batch_id, status) = path.into_inner();
    // An unknown status segment is a validation error, not a missing route
    let status: RecordStatus = status.parse().map_err(ServiceError::Validation)?;
    require_batch(&state, batch_id).await?;

    let records = state
        .storage
        .database
        .list_records_by_status(batch_id, status)
        .await?;

    let responses: Vec<RecordResponse> = records
        .into_iter()
        .map(RecordResponse::try_from)
        .collect::<Result<_>>()?;

    Ok(HttpResponse::Ok().json(responses))
}

/// Delete all records for a batch
/// DELETE /api/v1/records/batch/{batch_id}
async fn clear_records(state: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
    let batch_id = path.into_inner();
    require_batch(&state, batch_id).await?;

    let count = state.storage.database.clear_records(batch_id).await?;

    info!("Cleared {} records from batch {}", count, batch_id);

    Ok(HttpResponse::Ok().json(MessageResponse::with_details(
        format!("Deleted {} records from batch {}", count, batch_id),
        serde_json::json!({ "count": count, "batch_id": batch_id }),
    )))
}

/// Configure record endpoints
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/records")
            .route("", web::post().to(create_record))
            .route("/bulk", web::post().to(bulk_upload_records))
            .route("/batch/{batch_id}", web::get().to(list_records))
            .route(
                "/batch/{batch_id}/status/{status}",
                web::get().to(list_records_by_status),
            )
            .route("/batch/{batch_id}", web::delete().to(clear_records)),
    );
}
