//! File logging example
//!
//! Demonstrates building a logger from JSON configuration that writes to the
//! console, a text log file and a JSONL file at the same time.
//!
//! Run with: cargo run --example file_logging

use artissist_logger::prelude::*;

const CONFIG: &str = r#"{
    "service": "ingest-worker",
    "environment": "development",
    "emojis": true,
    "adapters": ["console", "file", "json"],
    "context": { "custom": { "deployment_id": "local" } },
    "adapter_config": {
        "file": { "file_path": "logs/ingest-worker.log" },
        "json": { "file_path": "logs/ingest-worker.jsonl" }
    }
}"#;

#[derive(Debug, thiserror::Error)]
#[error("asset {0} has an unsupported format")]
struct UnsupportedAsset(u32);

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Artissist Logger - File Logging Example ===\n");

    let config = LoggerConfig::from_json(CONFIG)?;
    let logger = LoggerFactory::create(&config);

    println!("1. Logging to console, text file and JSONL file:");
    logger
        .info_with("Worker started", LogOptions::new().event(LogEvent::SystemStart))
        .await;

    println!("\n2. Processing a batch:");
    for i in 1..=5u32 {
        let item_logger = logger.with_fields([("request_id", format!("item-{}", i))]);
        if i == 3 {
            let failure = UnsupportedAsset(i);
            item_logger
                .error_with(
                    "Asset rejected",
                    LogOptions::new()
                        .event(LogEvent::ErrorOccurred)
                        .error(ErrorDetails::from_error(&failure))
                        .tag("assets"),
                )
                .await;
            continue;
        }
        item_logger
            .info_with(
                format!("Processed item {}/5", i),
                LogOptions::new()
                    .event(LogEvent::AssetProcessing)
                    .meta("item", i)
                    .metrics(PerformanceMetrics::new().with_duration_ms(4.0 * i as f64)),
            )
            .await;
    }

    logger.info("All operations completed").await;

    // Close flushes and releases the log files
    logger.close().await;

    let metrics = logger.metrics();
    println!(
        "\nDelivered {} records, {} with adapter failures",
        metrics.total_logged(),
        metrics.partial_deliveries()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'logs/ingest-worker.log' and 'logs/ingest-worker.jsonl' for the output");

    Ok(())
}
