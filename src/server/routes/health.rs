//! Health check and service info endpoints

use actix_web::{HttpResponse, Result as ActixResult, web};
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(service_info))
        .route("/health", web::get().to(health_check));
}

/// Root endpoint with service information
async fn service_info() -> HttpResponse {
    debug!("Service info requested");

    let info = ServiceInfo {
        message: Cow::Borrowed("Pipeline Record Reconciliation API"),
        status: Cow::Borrowed("running"),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        build_time: Cow::Borrowed(env!("BUILD_TIME")),
        git_hash: Cow::Borrowed(env!("GIT_HASH")),
    };

    HttpResponse::Ok().json(info)
}

/// Basic health check endpoint
///
/// Used by load balancers and monitoring systems.
async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    Ok(HttpResponse::Ok().json(status))
}

/// Service information payload
#[derive(Debug, Clone, serde::Serialize)]
struct ServiceInfo {
    message: Cow<'static, str>,
    status: Cow<'static, str>,
    version: Cow<'static, str>,
    build_time: Cow<'static, str>,
    git_hash: Cow<'static, str>,
}

/// Basic health status
#[derive(Debug, Clone, serde::Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
}
