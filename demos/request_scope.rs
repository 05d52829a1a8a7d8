//! Request-scoped context example
//!
//! Demonstrates the ambient context: a request handler installs a context
//! once and every log call inside the request picks it up, including calls
//! made deep in helper functions and detached background calls.
//!
//! Run with: cargo run --example request_scope

use artissist_logger::prelude::*;
use std::time::Duration;

async fn load_projects(logger: &Logger) -> Vec<&'static str> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    logger
        .debug_with("Loaded projects", LogOptions::new().event(LogEvent::DatabaseOperation))
        .await;
    vec!["mosaic", "atlas"]
}

async fn handle_request(logger: &Logger, request_id: &str, user_id: &str) {
    let ctx = LoggingContext::new()
        .with_request_id(request_id)
        .with_user_id(user_id)
        .with_correlation_id(format!("corr-{}", request_id));

    scope_context(ctx, async {
        logger
            .info_with("Request received", LogOptions::new().event(LogEvent::ApiRequest))
            .await;

        let projects = load_projects(logger).await;

        // Fire and forget: the current request context travels with it
        let _ = logger.info_detached(
            format!("Returned {} projects", projects.len()),
            LogOptions::new().event(LogEvent::AnalyticsEvent),
        );
    })
    .await;
}

#[tokio::main]
async fn main() {
    println!("=== Artissist Logger - Request Scope Example ===\n");

    let logger = LoggerFactory::create_backend_logger(
        "projects-api",
        "development",
        true,
        None,
        &["console"],
    );

    // Two concurrent requests never see each other's context
    tokio::join!(
        handle_request(&logger, "req-1", "alice"),
        handle_request(&logger, "req-2", "bob"),
    );

    logger.info("Outside any request, no request context").await;

    // Give detached calls a moment before shutting down
    tokio::time::sleep(Duration::from_millis(20)).await;
    logger.close().await;

    println!("\n=== Example completed successfully! ===");
}
