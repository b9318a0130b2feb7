//! Seed the database with sample order tracking data
//!
//! Clears any existing data, loads a demo batch with expected and processed
//! records, then prints the reconciliation summary.
//!
//! Usage: `cargo run --bin seed`

use recontrack::config::Config;
use recontrack::core::reconciliation::compare_id_sets;
use recontrack::core::types::{NewRecord, RecordStatus, RecordType};
use recontrack::storage::StorageLayer;
use recontrack::utils::error::Result;
use std::process::ExitCode;
use tracing::{Level, info};

/// Expected order identifiers for the demo batch
const EXPECTED_ORDERS: &[i64] = &[
    1001, 1002, 1003, 1004, 1005, 1006, 1007, 1008, 1009, 1010,
];

/// Processed order identifiers: three expected orders never arrive and one
/// shows up that was never announced
const PROCESSED_ORDERS: &[i64] = &[1001, 1002, 1004, 1006, 1007, 1008, 1010, 9999];

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    match seed().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn seed() -> Result<()> {
    let config = match Config::from_file("config/recontrack.yaml").await {
        Ok(config) => config,
        Err(_) => Config::from_env()?,
    };

    let storage = StorageLayer::new(&config.storage).await?;
    storage.migrate().await?;

    clear_existing_data(&storage).await?;

    let batch = storage
        .database
        .create_batch(
            "demo_orders_2025_08",
            RecordType::Order,
            Some("Demo batch: daily order export vs fulfillment confirmations".to_string()),
        )
        .await?;
    info!("Created batch: {} (ID: {})", batch.batch_name, batch.id);

    let expected: Vec<NewRecord> = EXPECTED_ORDERS
        .iter()
        .map(|&record_id| NewRecord {
            record_id,
            status: RecordStatus::Expected,
            record_metadata: Some(format!("Order {}", record_id)),
        })
        .collect();
    let count = storage
        .database
        .bulk_create_records(batch.id, &expected)
        .await?;
    info!("Loaded {} expected records", count);

    let processed: Vec<NewRecord> = PROCESSED_ORDERS
        .iter()
        .map(|&record_id| NewRecord {
            record_id,
            status: RecordStatus::Processed,
            record_metadata: Some(format!("Order {} fulfilled", record_id)),
        })
        .collect();
    let count = storage
        .database
        .bulk_create_records(batch.id, &processed)
        .await?;
    info!("Loaded {} processed records", count);

    // Summary through the same engine the analysis endpoints use
    let comparison = compare_id_sets(EXPECTED_ORDERS, PROCESSED_ORDERS);
    info!("Reconciliation summary for '{}':", batch.batch_name);
    info!("  expected:   {}", comparison.expected_count);
    info!("  processed:  {}", comparison.processed_count);
    info!("  missing:    {:?}", comparison.missing);
    info!("  unexpected: {:?}", comparison.unexpected);
    info!("  rate:       {:.2}%", comparison.processing_rate);

    Ok(())
}

/// Remove all batches (and their records, via cascade)
async fn clear_existing_data(storage: &StorageLayer) -> Result<()> {
    let batches = storage.database.list_batches().await?;
    let count = batches.len();

    for batch in batches {
        storage.database.delete_batch(batch.id).await?;
    }

    info!("Cleared {} existing batches", count);
    Ok(())
}
