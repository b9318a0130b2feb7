//! HTTP API tests for the reconciliation analysis endpoints

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

use crate::common::test_state;
use recontrack::server::routes;

/// Create a batch through the API and evaluate to its id
macro_rules! create_batch {
    ($app:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/batches")
            .set_json(json!({
                "batch_name": $name,
                "record_type": "order",
                "description": "analysis endpoint tests"
            }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        body["id"].as_i64().unwrap()
    }};
}

/// Bulk upload ids under one status
macro_rules! upload_ids {
    ($app:expr, $batch_id:expr, $status:expr, $ids:expr) => {{
        let records: Vec<Value> = $ids
            .iter()
            .map(|id| json!({"record_id": id, "status": $status}))
            .collect();
        let req = test::TestRequest::post()
            .uri("/api/v1/records/bulk")
            .set_json(json!({"batch_id": $batch_id, "records": records}))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }};
}

#[actix_web::test]
async fn test_missing_records_with_gaps() {
    let state = test_state().await;
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_api)).await;
    let batch_id = create_batch!(app, "gaps_batch");

    upload_ids!(app, batch_id, "expected", [1001, 1002, 1003, 1004, 1005]);
    upload_ids!(app, batch_id, "processed", [1001, 1003, 1005]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/analysis/missing/{}", batch_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["batch_id"].as_i64(), Some(batch_id));
    assert_eq!(body["batch_name"], "gaps_batch");
    assert_eq!(body["total_expected"], 5);
    assert_eq!(body["total_processed"], 3);
    assert_eq!(body["missing_count"], 2);
    assert_eq!(body["missing_records"], json!([1002, 1004]));
    assert_eq!(body["unexpected_count"], 0);
    assert_eq!(body["unexpected_records"], json!([]));
    assert_eq!(body["processing_rate"], 60.0);
}

#[actix_web::test]
async fn test_missing_records_fully_processed() {
    let state = test_state().await;
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_api)).await;
    let batch_id = create_batch!(app, "complete_batch");

    upload_ids!(app, batch_id, "expected", [3001, 3002]);
    upload_ids!(app, batch_id, "processed", [3001, 3002]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/analysis/missing/{}", batch_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["missing_records"], json!([]));
    assert_eq!(body["processing_rate"], 100.0);
}

#[actix_web::test]
async fn test_missing_records_nothing_processed() {
    let state = test_state().await;
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_api)).await;
    let batch_id = create_batch!(app, "stalled_batch");

    upload_ids!(app, batch_id, "expected", [4001, 4002]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/analysis/missing/{}", batch_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["missing_records"], json!([4001, 4002]));
    assert_eq!(body["processing_rate"], 0.0);
}

#[actix_web::test]
async fn test_unexpected_records() {
    let state = test_state().await;
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_api)).await;
    let batch_id = create_batch!(app, "surprise_batch");

    upload_ids!(app, batch_id, "expected", [5001]);
    upload_ids!(app, batch_id, "processed", [5001, 9999]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/analysis/missing/{}", batch_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["missing_records"], json!([]));
    assert_eq!(body["unexpected_records"], json!([9999]));
    assert_eq!(body["unexpected_count"], 1);
}

#[actix_web::test]
async fn test_empty_batch_analysis() {
    let state = test_state().await;
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_api)).await;
    let batch_id = create_batch!(app, "empty_batch");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/analysis/missing/{}", batch_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["missing_records"], json!([]));
    assert_eq!(body["unexpected_records"], json!([]));
    assert_eq!(body["processing_rate"], 0.0);
}

#[actix_web::test]
async fn test_missing_analysis_for_nonexistent_batch() {
    let state = test_state().await;
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_api)).await;

    for path in [
        "/api/v1/analysis/missing/999",
        "/api/v1/analysis/status/999",
        "/api/v1/analysis/statistics/999",
    ] {
        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path: {}", path);
    }
}

#[actix_web::test]
async fn test_duplicate_rows_collapse_in_reconciliation() {
    let state = test_state().await;
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_api)).await;
    let batch_id = create_batch!(app, "duplicate_rows_batch");

    // 7001 registered twice as expected; still one logical member
    upload_ids!(app, batch_id, "expected", [7001, 7001, 7002]);
    upload_ids!(app, batch_id, "processed", [7002]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/analysis/missing/{}", batch_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_expected"], 2);
    assert_eq!(body["missing_records"], json!([7001]));
    assert_eq!(body["processing_rate"], 50.0);
}

#[actix_web::test]
async fn test_processing_status_listing() {
    let state = test_state().await;
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_api)).await;
    let batch_id = create_batch!(app, "status_listing_batch");

    upload_ids!(app, batch_id, "expected", [1003, 1001, 1001, 1002]);
    upload_ids!(app, batch_id, "processed", [1002, 1001]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/analysis/status/{}", batch_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["batch_name"], "status_listing_batch");
    assert_eq!(body["record_type"], "order");
    // Transparent row listing: sorted, duplicates preserved
    assert_eq!(body["expected_records"], json!([1001, 1001, 1002, 1003]));
    assert_eq!(body["processed_records"], json!([1001, 1002]));
    assert_eq!(body["expected_count"], 4);
    assert_eq!(body["processed_count"], 2);
}

#[actix_web::test]
async fn test_batch_statistics_mixes_row_and_set_counts() {
    let state = test_state().await;
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_api)).await;
    let batch_id = create_batch!(app, "statistics_batch");

    // 7001 appears twice under expected: row counts see 3 expected rows,
    // the set-derived fields see 2 distinct expected ids.
    upload_ids!(app, batch_id, "expected", [7001, 7001, 7002]);
    upload_ids!(app, batch_id, "processed", [7002]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/analysis/statistics/{}", batch_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_records"], 4);
    assert_eq!(body["expected_count"], 3);
    assert_eq!(body["processed_count"], 1);
    assert_eq!(body["missing_count"], 1);
    assert_eq!(body["processing_rate"], 50.0);
}

#[actix_web::test]
async fn test_analysis_after_batch_delete() {
    let state = test_state().await;
    let app =
        test::init_service(App::new().app_data(state).configure(routes::configure_api)).await;
    let batch_id = create_batch!(app, "deleted_batch");

    upload_ids!(app, batch_id, "expected", [1, 2, 3]);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/batches/{}", batch_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/analysis/missing/{}", batch_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
