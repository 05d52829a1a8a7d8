//! Main logger implementation

use super::{
    adapter::LogAdapter,
    error::Result,
    log_context::{current_context, LoggingContext},
    log_event::LogEvent,
    log_level::LogLevel,
    log_record::{ErrorDetails, LogMetadata, LogRecord, PerformanceMetrics},
    metrics::LoggerMetrics,
    symbol::SymbolResolver,
};
use futures::future::join_all;
use futures::FutureExt;
use serde_json::Value;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Service name used when none is configured
pub const DEFAULT_SERVICE: &str = "unknown";

/// Environment used when none is configured
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// Optional parts of a log call
///
/// # Example
///
/// ```
/// use artissist_logger::{LogEvent, LogOptions, LoggingContext, PerformanceMetrics};
///
/// let options = LogOptions::new()
///     .event(LogEvent::ApiRequest)
///     .meta("path", "/api/projects")
///     .metrics(PerformanceMetrics::new().with_duration_ms(12.0))
///     .context(LoggingContext::new().with_user_id("u1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub event: Option<LogEvent>,
    pub custom_event: Option<String>,
    pub metadata: Option<LogMetadata>,
    pub metrics: Option<PerformanceMetrics>,
    pub error: Option<ErrorDetails>,
    pub tags: Option<Vec<String>>,
    pub context: Option<LoggingContext>,
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn event(mut self, event: LogEvent) -> Self {
        self.event = Some(event);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn custom_event(mut self, name: impl Into<String>) -> Self {
        self.custom_event = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn metadata(mut self, metadata: LogMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Add one metadata entry
    #[must_use = "builder methods return a new value"]
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(LogMetadata::new)
            .insert(key.into(), value.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn metrics(mut self, metrics: PerformanceMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error(mut self, error: ErrorDetails) -> Self {
        self.error = Some(error);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: LoggingContext) -> Self {
        self.context = Some(context);
        self
    }
}

/// Structured logger fanning records out to its adapters
///
/// A `Logger` is cheap to clone; clones and children derived with
/// [`with_context`](Logger::with_context) share the adapter set, symbol
/// resolver, metrics and open/closed state.
///
/// Logging calls never fail: adapter errors and panics are reported on
/// stderr, counted in [`LoggerMetrics`], and otherwise discarded.
///
/// # Example
///
/// ```
/// use artissist_logger::prelude::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let logger = Logger::builder()
///     .service("billing")
///     .environment("staging")
///     .adapter(ConsoleAdapter::new())
///     .build();
///
/// let request_logger = logger.with_context(LoggingContext::new().with_request_id("req-42"));
/// request_logger.info("charge accepted").await;
/// logger.close().await;
/// # }
/// ```
#[derive(Clone)]
pub struct Logger {
    service: Arc<str>,
    environment: Arc<str>,
    emojis: bool,
    min_level: LogLevel,
    base_context: Arc<LoggingContext>,
    adapters: Arc<[Arc<dyn LogAdapter>]>,
    resolver: Arc<SymbolResolver>,
    metrics: Arc<LoggerMetrics>,
    closed: Arc<AtomicBool>,
    runtime: Option<Handle>,
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn emojis_enabled(&self) -> bool {
        self.emojis
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn base_context(&self) -> &LoggingContext {
        &self.base_context
    }

    /// The resolver shared with every child of this logger
    pub fn symbol_resolver(&self) -> &Arc<SymbolResolver> {
        &self.resolver
    }

    /// Declared names of the adapters, in dispatch order
    pub fn adapter_names(&self) -> Vec<&str> {
        self.adapters.iter().map(|a| a.name()).collect()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Log a record and wait until every adapter has settled
    pub async fn log(&self, level: LogLevel, message: impl Into<String>, options: LogOptions) {
        let ambient = current_context();
        self.dispatch(level, message.into(), options, ambient).await;
    }

    /// Merge order: ambient, then logger base, then the call's own context
    fn resolve_context(
        &self,
        ambient: Option<&LoggingContext>,
        supplied: Option<&LoggingContext>,
    ) -> LoggingContext {
        let context = match ambient {
            Some(ambient) => ambient.merge(&self.base_context),
            None => (*self.base_context).clone(),
        };
        match supplied {
            Some(supplied) => context.merge(supplied),
            None => context,
        }
    }

    async fn dispatch(
        &self,
        level: LogLevel,
        message: String,
        options: LogOptions,
        ambient: Option<LoggingContext>,
    ) {
        if self.is_closed() || level < self.min_level {
            return;
        }

        let context = self.resolve_context(ambient.as_ref(), options.context.as_ref());

        let mut record = LogRecord::new(level, message, &*self.service).with_context(context);
        record.event = options.event;
        record.custom_event = options.custom_event;
        record.metadata = options.metadata;
        record.metrics = options.metrics;
        record.error = options.error;
        record.tags = options.tags;

        let symbol = if self.emojis {
            self.resolver
                .get_symbol(record.event, record.custom_event.as_deref())
        } else {
            None
        };

        if self.adapters.is_empty() {
            return;
        }

        let writes = self
            .adapters
            .iter()
            .map(|adapter| deliver(adapter.as_ref(), &record, self.emojis, symbol.as_deref()));
        let outcomes = join_all(writes).await;

        let mut has_error = false;
        for (adapter, outcome) in self.adapters.iter().zip(outcomes) {
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Adapter '{}' failed: {}", adapter.name(), e);
                    self.metrics.record_write_failure();
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Adapter '{}' panicked: {}. \
                         Other adapters continue to function.",
                        adapter.name(),
                        panic_message(panic_info.as_ref())
                    );
                    self.metrics.record_adapter_panic();
                    has_error = true;
                }
            }
        }

        if has_error {
            self.metrics.record_partial_delivery();
        } else {
            self.metrics.record_logged();
        }
    }

    #[inline]
    pub async fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message, LogOptions::default()).await;
    }

    #[inline]
    pub async fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message, LogOptions::default()).await;
    }

    #[inline]
    pub async fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message, LogOptions::default()).await;
    }

    #[inline]
    pub async fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message, LogOptions::default()).await;
    }

    pub async fn debug_with(&self, message: impl Into<String>, options: LogOptions) {
        self.log(LogLevel::Debug, message, options).await;
    }

    pub async fn info_with(&self, message: impl Into<String>, options: LogOptions) {
        self.log(LogLevel::Info, message, options).await;
    }

    pub async fn warn_with(&self, message: impl Into<String>, options: LogOptions) {
        self.log(LogLevel::Warn, message, options).await;
    }

    pub async fn error_with(&self, message: impl Into<String>, options: LogOptions) {
        self.log(LogLevel::Error, message, options).await;
    }

    /// Schedule a log call without waiting for it
    ///
    /// The call runs as a task on the runtime handle captured when the
    /// logger was built. The ambient context is captured now, so the record
    /// carries the caller's scope even though the task does not.
    ///
    /// Ordering is at most causal with other log calls from this logger and
    /// is not guaranteed relative to the caller's subsequent code. The
    /// returned handle may be dropped; awaiting it never yields a logging
    /// failure. Returns `None` when nothing was scheduled: the logger is
    /// closed, the level is filtered out, or no runtime is available.
    pub fn log_detached(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        options: LogOptions,
    ) -> Option<JoinHandle<()>> {
        if self.is_closed() || level < self.min_level {
            return None;
        }

        let Some(runtime) = self.runtime.as_ref() else {
            let dropped = self.metrics.record_detached_dropped();
            if dropped == 0 {
                eprintln!(
                    "[LOGGER WARNING] No async runtime available; detached log calls are dropped. \
                     Build the logger inside a runtime or pass one with LoggerBuilder::runtime."
                );
            }
            return None;
        };

        let logger = self.clone();
        let message = message.into();
        let ambient = current_context();
        Some(runtime.spawn(async move {
            logger.dispatch(level, message, options, ambient).await;
        }))
    }

    pub fn debug_detached(&self, message: impl Into<String>, options: LogOptions) -> Option<JoinHandle<()>> {
        self.log_detached(LogLevel::Debug, message, options)
    }

    pub fn info_detached(&self, message: impl Into<String>, options: LogOptions) -> Option<JoinHandle<()>> {
        self.log_detached(LogLevel::Info, message, options)
    }

    pub fn warn_detached(&self, message: impl Into<String>, options: LogOptions) -> Option<JoinHandle<()>> {
        self.log_detached(LogLevel::Warn, message, options)
    }

    pub fn error_detached(&self, message: impl Into<String>, options: LogOptions) -> Option<JoinHandle<()>> {
        self.log_detached(LogLevel::Error, message, options)
    }

    /// Derive a child logger with additional base context
    ///
    /// The child shares this logger's adapters, resolver and metrics. Its
    /// base context is this logger's base context merged with `context`;
    /// this logger is left unchanged.
    #[must_use]
    pub fn with_context(&self, context: LoggingContext) -> Logger {
        let mut child = self.clone();
        child.base_context = Arc::new(self.base_context.merge(&context));
        child
    }

    /// Derive a child logger from loose key/value fields
    ///
    /// Tracing keys (`correlation_id`, `user_id`, `session_id`,
    /// `request_id`, `trace_id`, `span_id`) fill the typed slots, any other
    /// key becomes a custom field.
    #[must_use]
    pub fn with_fields<I, K, V>(&self, fields: I) -> Logger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.with_context(LoggingContext::from_fields(fields))
    }

    /// Close every adapter and stop accepting records
    ///
    /// Adapters are closed concurrently. Failures are reported and counted,
    /// never returned. Closing twice is a no-op; closing any clone or child
    /// closes the whole family since they share adapters.
    pub async fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        let closes = self
            .adapters
            .iter()
            .map(|adapter| AssertUnwindSafe(adapter.close()).catch_unwind());
        let outcomes = join_all(closes).await;

        for (adapter, outcome) in self.adapters.iter().zip(outcomes) {
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Adapter '{}' close failed: {}", adapter.name(), e);
                    self.metrics.record_close_failure();
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Adapter '{}' panicked during close: {}",
                        adapter.name(),
                        panic_message(panic_info.as_ref())
                    );
                    self.metrics.record_adapter_panic();
                }
            }
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("service", &self.service)
            .field("environment", &self.environment)
            .field("emojis", &self.emojis)
            .field("min_level", &self.min_level)
            .field("base_context", &self.base_context)
            .field("adapters", &self.adapter_names())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Format and write one record to one adapter
///
/// A panicking adapter settles as `Err` without cancelling its siblings.
async fn deliver(
    adapter: &dyn LogAdapter,
    record: &LogRecord,
    include_symbol: bool,
    symbol: Option<&str>,
) -> std::thread::Result<Result<()>> {
    AssertUnwindSafe(async {
        let formatted = adapter.format_message(record, include_symbol, symbol);
        adapter.write(record, &formatted).await
    })
    .catch_unwind()
    .await
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use artissist_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .service("api")
///     .environment("prod")
///     .emojis(true)
///     .min_level(LogLevel::Info)
///     .context(LoggingContext::new().with_field("deployment_id", "blue"))
///     .adapter(ConsoleAdapter::new())
///     .build();
///
/// assert_eq!(logger.adapter_names(), vec!["console"]);
/// ```
pub struct LoggerBuilder {
    service: String,
    environment: String,
    emojis: bool,
    min_level: LogLevel,
    context: LoggingContext,
    adapters: Vec<Arc<dyn LogAdapter>>,
    resolver: Option<Arc<SymbolResolver>>,
    runtime: Option<Handle>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            emojis: false,
            min_level: LogLevel::Debug,
            context: LoggingContext::default(),
            adapters: Vec::new(),
            resolver: None,
            runtime: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Prefix text output with event symbols
    #[must_use = "builder methods return a new value"]
    pub fn emojis(mut self, enabled: bool) -> Self {
        self.emojis = enabled;
        self
    }

    /// Set minimum log level (default: everything)
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the base context carried by every record
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: LoggingContext) -> Self {
        self.context = context;
        self
    }

    /// Add an adapter
    #[must_use = "builder methods return a new value"]
    pub fn adapter<A: LogAdapter + 'static>(mut self, adapter: A) -> Self {
        self.adapters.push(Arc::new(adapter));
        self
    }

    /// Add an adapter that is already shared elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_adapter(mut self, adapter: Arc<dyn LogAdapter>) -> Self {
        self.adapters.push(adapter);
        self
    }

    /// Use a specific symbol resolver, e.g. one pre-loaded with custom mappings
    #[must_use = "builder methods return a new value"]
    pub fn symbol_resolver(mut self, resolver: Arc<SymbolResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Runtime that detached log calls are spawned onto
    ///
    /// Defaults to the runtime `build` is called from, if any.
    #[must_use = "builder methods return a new value"]
    pub fn runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            service: Arc::from(self.service),
            environment: Arc::from(self.environment),
            emojis: self.emojis,
            min_level: self.min_level,
            base_context: Arc::new(self.context),
            adapters: Arc::from(self.adapters),
            resolver: self.resolver.unwrap_or_default(),
            metrics: Arc::new(LoggerMetrics::new()),
            closed: Arc::new(AtomicBool::new(false)),
            runtime: self.runtime.or_else(|| Handle::try_current().ok()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
