//! # Artissist Logger
//!
//! Structured logging client for services and agents that share one logging
//! vocabulary.
//!
//! ## Features
//!
//! - **Structured records**: level, event, context, metadata, metrics, error details, tags
//! - **Event symbols**: optional emoji prefix per event, with runtime custom events
//! - **Correlation context**: base context per logger plus a task-scoped ambient context
//! - **Concurrent fan-out**: every adapter is written to at once, failures stay isolated
//! - **Pluggable adapters**: console, file and JSONL built in, anything else via [`LogAdapter`]
//!
//! ## Example
//!
//! ```
//! use artissist_logger::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let logger = Logger::builder()
//!     .service("backend-api")
//!     .environment("development")
//!     .emojis(true)
//!     .adapter(ConsoleAdapter::new())
//!     .build();
//!
//! let ctx = LoggingContext::new().with_correlation_id("req-1");
//! scope_context(ctx, async {
//!     logger
//!         .info_with("Projects listed", LogOptions::new().event(LogEvent::ApiRequest))
//!         .await;
//! })
//! .await;
//!
//! logger.close().await;
//! # }
//! ```

pub mod adapters;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::adapters::ConsoleAdapter;
    #[cfg(feature = "file")]
    pub use crate::adapters::{FileAdapter, JsonAdapter};
    pub use crate::core::{
        current_context, scope_context, sync_scope_context, AdapterRegistry, ErrorDetails,
        LogAdapter, LogEvent, LogLevel, LogOptions, LogRecord, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerFactory, LoggerMetrics, LoggingContext,
        PerformanceMetrics, Result, SymbolMapping, SymbolResolver,
    };
}

#[cfg(feature = "console")]
pub use adapters::ConsoleAdapter;
#[cfg(feature = "file")]
pub use adapters::{FileAdapter, JsonAdapter};
pub use core::{
    current_context, format_message, scope_context, sync_scope_context, AdapterConstructor,
    AdapterRegistry, ErrorDetails, LogAdapter, LogEvent, LogLevel, LogMetadata, LogOptions,
    LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerFactory, LoggerMetrics,
    LoggingContext, PerformanceMetrics, Result, SymbolMapping, SymbolResolver,
};
