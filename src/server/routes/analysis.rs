//! Reconciliation analysis API endpoints
//!
//! These endpoints are read-only projections over a batch's rows; the set
//! computation itself lives in [`crate::core::reconciliation`].

use actix_web::{HttpResponse, web};
use tracing::debug;

use crate::server::state::AppState;
use crate::utils::error::Result;

/// Reconcile a batch's expected rows against its processed rows
/// GET /api/v1/analysis/missing/{batch_id}
async fn missing_records(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let batch_id = path.into_inner();
    debug!("Reconciliation requested for batch {}", batch_id);

    let result = state.reconciliation.missing_records(batch_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// List all expected and processed identifiers for a batch
/// GET /api/v1/analysis/status/{batch_id}
async fn processing_status(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let batch_id = path.into_inner();
    debug!("Processing status requested for batch {}", batch_id);

    let result = state.reconciliation.processing_status(batch_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Aggregate statistics for a batch
/// GET /api/v1/analysis/statistics/{batch_id}
async fn batch_statistics(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let batch_id = path.into_inner();
    debug!("Statistics requested for batch {}", batch_id);

    let result = state.reconciliation.batch_statistics(batch_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Configure analysis endpoints
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/analysis")
            .route("/missing/{batch_id}", web::get().to(missing_records))
            .route("/status/{batch_id}", web::get().to(processing_status))
            .route("/statistics/{batch_id}", web::get().to(batch_statistics)),
    );
}
