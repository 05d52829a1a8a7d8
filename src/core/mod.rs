//! Core logger types and traits

pub mod adapter;
pub mod config;
pub mod error;
pub mod factory;
pub mod log_context;
pub mod log_event;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod symbol;

pub use adapter::{format_message, sanitize_message, LogAdapter, TEXT_TIMESTAMP_FORMAT};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use factory::{AdapterConstructor, AdapterRegistry, LoggerFactory};
pub use log_context::{current_context, scope_context, sync_scope_context, LoggingContext};
pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use log_record::{ErrorDetails, LogMetadata, LogRecord, PerformanceMetrics};
pub use logger::{LogOptions, Logger, LoggerBuilder, DEFAULT_ENVIRONMENT, DEFAULT_SERVICE};
pub use metrics::LoggerMetrics;
pub use symbol::{default_mappings, SymbolMapping, SymbolResolver};
