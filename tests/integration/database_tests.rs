//! Storage operation tests against in-memory SQLite

use crate::common::TestDatabase;
use recontrack::core::types::{NewRecord, RecordStatus, RecordType};

fn new_record(record_id: i64, status: RecordStatus) -> NewRecord {
    NewRecord {
        record_id,
        status,
        record_metadata: None,
    }
}

#[tokio::test]
async fn test_create_and_find_batch() {
    let db = TestDatabase::new().await;

    let created = db
        .storage()
        .database
        .create_batch("nightly_orders", RecordType::Order, Some("desc".to_string()))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.batch_name, "nightly_orders");
    assert_eq!(created.record_type, "order");
    assert!(created.updated_at.is_none());

    let by_id = db
        .storage()
        .database
        .find_batch_by_id(created.id)
        .await
        .unwrap();
    assert_eq!(by_id.as_ref().map(|b| b.id), Some(created.id));

    let by_name = db
        .storage()
        .database
        .find_batch_by_name("nightly_orders")
        .await
        .unwrap();
    assert!(by_name.is_some());

    let missing = db
        .storage()
        .database
        .find_batch_by_name("no_such_batch")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_list_batches_ordered_by_id() {
    let db = TestDatabase::new().await;

    for name in ["alpha", "beta", "gamma"] {
        db.storage()
            .database
            .create_batch(name, RecordType::File, None)
            .await
            .unwrap();
    }

    let batches = db.storage().database.list_batches().await.unwrap();
    assert_eq!(batches.len(), 3);
    assert!(batches.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[tokio::test]
async fn test_delete_batch_cascades_to_records() {
    let db = TestDatabase::new().await;

    let batch = db
        .storage()
        .database
        .create_batch("cascade_batch", RecordType::Shipment, None)
        .await
        .unwrap();

    db.storage()
        .database
        .bulk_create_records(
            batch.id,
            &[
                new_record(1, RecordStatus::Expected),
                new_record(2, RecordStatus::Processed),
            ],
        )
        .await
        .unwrap();

    let deleted = db.storage().database.delete_batch(batch.id).await.unwrap();
    assert!(deleted);

    let gone = db
        .storage()
        .database
        .find_batch_by_id(batch.id)
        .await
        .unwrap();
    assert!(gone.is_none());

    let remaining = db.storage().database.count_records(batch.id).await.unwrap();
    assert_eq!(remaining, 0);

    // Deleting again reports absence
    let deleted = db.storage().database.delete_batch(batch.id).await.unwrap();
    assert!(!deleted);
}

#[tokio::test]
async fn test_bulk_create_and_count() {
    let db = TestDatabase::new().await;

    let batch = db
        .storage()
        .database
        .create_batch("bulk_batch", RecordType::Transaction, None)
        .await
        .unwrap();

    let records: Vec<NewRecord> = (1..=5)
        .map(|i| new_record(1000 + i, RecordStatus::Expected))
        .collect();
    let count = db
        .storage()
        .database
        .bulk_create_records(batch.id, &records)
        .await
        .unwrap();
    assert_eq!(count, 5);

    let empty = db
        .storage()
        .database
        .bulk_create_records(batch.id, &[])
        .await
        .unwrap();
    assert_eq!(empty, 0);

    assert_eq!(
        db.storage().database.count_records(batch.id).await.unwrap(),
        5
    );
    assert_eq!(
        db.storage()
            .database
            .count_records_by_status(batch.id, RecordStatus::Expected)
            .await
            .unwrap(),
        5
    );
    assert_eq!(
        db.storage()
            .database
            .count_records_by_status(batch.id, RecordStatus::Processed)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_list_record_ids_filters_by_status_and_keeps_duplicates() {
    let db = TestDatabase::new().await;

    let batch = db
        .storage()
        .database
        .create_batch("dup_batch", RecordType::Payment, None)
        .await
        .unwrap();

    db.storage()
        .database
        .bulk_create_records(
            batch.id,
            &[
                new_record(7001, RecordStatus::Expected),
                new_record(7001, RecordStatus::Expected),
                new_record(7002, RecordStatus::Expected),
                new_record(7002, RecordStatus::Processed),
            ],
        )
        .await
        .unwrap();

    let mut expected = db
        .storage()
        .database
        .list_record_ids(batch.id, RecordStatus::Expected)
        .await
        .unwrap();
    expected.sort_unstable();
    assert_eq!(expected, vec![7001, 7001, 7002]);

    let processed = db
        .storage()
        .database
        .list_record_ids(batch.id, RecordStatus::Processed)
        .await
        .unwrap();
    assert_eq!(processed, vec![7002]);
}

#[tokio::test]
async fn test_clear_records_reports_deleted_rows() {
    let db = TestDatabase::new().await;

    let batch = db
        .storage()
        .database
        .create_batch("clear_batch", RecordType::Order, None)
        .await
        .unwrap();

    db.storage()
        .database
        .bulk_create_records(
            batch.id,
            &[
                new_record(1, RecordStatus::Expected),
                new_record(2, RecordStatus::Expected),
                new_record(1, RecordStatus::Processed),
            ],
        )
        .await
        .unwrap();

    let cleared = db.storage().database.clear_records(batch.id).await.unwrap();
    assert_eq!(cleared, 3);

    let cleared_again = db.storage().database.clear_records(batch.id).await.unwrap();
    assert_eq!(cleared_again, 0);

    // The batch itself survives a record clear
    assert!(
        db.storage()
            .database
            .find_batch_by_id(batch.id)
            .await
            .unwrap()
            .is_some()
    );
}
