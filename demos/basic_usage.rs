//! Basic logger usage example
//!
//! Demonstrates console logging, event symbols, custom events and child
//! loggers.
//!
//! Run with: cargo run --example basic_usage

use artissist_logger::prelude::*;

#[tokio::main]
async fn main() {
    println!("=== Artissist Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .service("backend-api")
        .environment("development")
        .emojis(true)
        .context(LoggingContext::new().with_field("service_version", "1.0.0"))
        .adapter(ConsoleAdapter::with_colors(true))
        .build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message").await;
    logger.info("This is an info message").await;
    logger.warn("This is a warning message").await;
    logger.error("This is an error message").await;

    println!("\n2. Events pick their symbol from the shared table:");
    logger
        .info_with("Service started", LogOptions::new().event(LogEvent::SystemStart))
        .await;
    logger
        .info_with(
            "Request completed",
            LogOptions::new()
                .event(LogEvent::PerformanceMetric)
                .metrics(PerformanceMetrics::new().with_duration_ms(18.4)),
        )
        .await;

    println!("\n3. Custom events registered at runtime:");
    logger
        .symbol_resolver()
        .add_custom_mapping("cache_warm", SymbolMapping::new("🔥", "Cache warm-up"));
    logger
        .info_with("Cache warmed", LogOptions::new().custom_event("cache_warm"))
        .await;

    println!("\n4. Child loggers add context without touching the parent:");
    let user_logger = logger.with_fields([("user_id", "user-42"), ("correlation_id", "c-1")]);
    user_logger
        .info_with("User signed in", LogOptions::new().event(LogEvent::UserAuth))
        .await;
    logger.info("Parent logger is unchanged").await;

    logger.close().await;
    println!("\n=== Example completed successfully! ===");
}
