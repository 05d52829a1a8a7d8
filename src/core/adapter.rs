//! Adapter trait for log output destinations

use super::{error::Result, log_level::LogLevel, log_record::LogRecord};
use async_trait::async_trait;

/// Timestamp layout used in text output
pub const TEXT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trait for log output destinations
///
/// Adapters are shared between a logger and its children through `Arc` and
/// may be written to from several tasks at once, so `write` and `close` take
/// `&self` and must be safe to call concurrently.
///
/// # Example
///
/// ```no_run
/// use artissist_logger::core::{LogAdapter, LogRecord, Result};
/// use async_trait::async_trait;
///
/// struct StderrAdapter;
///
/// #[async_trait]
/// impl LogAdapter for StderrAdapter {
///     fn name(&self) -> &str {
///         "stderr"
///     }
///
///     async fn write(&self, _record: &LogRecord, formatted: &str) -> Result<()> {
///         eprintln!("{}", formatted);
///         Ok(())
///     }
///
///     async fn close(&self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait LogAdapter: Send + Sync {
    /// Registry name this adapter was declared under
    fn name(&self) -> &str;

    /// Emit one formatted record to the destination
    async fn write(&self, record: &LogRecord, formatted: &str) -> Result<()>;

    /// Release held resources
    ///
    /// Must be idempotent: closing an already closed adapter returns `Ok`.
    async fn close(&self) -> Result<()>;

    /// Render a record as one line of text
    fn format_message(&self, record: &LogRecord, include_symbol: bool, symbol: Option<&str>) -> String {
        format_message(record, include_symbol, symbol)
    }
}

/// Render a record as `<timestamp> <LEVEL> [<service>] <symbol> <message>`
///
/// The level is left-padded to five columns. Correlation, user and request
/// ids from the record context are appended as ` | key=value, ...` in that
/// fixed order when present. The symbol is emitted only when `include_symbol`
/// is set and a symbol was resolved.
pub fn format_message(record: &LogRecord, include_symbol: bool, symbol: Option<&str>) -> String {
    compose_line(record, include_symbol, symbol, |padded, _| padded)
}

/// Escape line breaks and tabs so one record stays one line of text
///
/// Prevents log injection: a message cannot forge a second entry.
pub fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Shared line layout; `paint_level` may decorate the padded level text
pub(crate) fn compose_line<F>(
    record: &LogRecord,
    include_symbol: bool,
    symbol: Option<&str>,
    paint_level: F,
) -> String
where
    F: FnOnce(String, LogLevel) -> String,
{
    let timestamp_str = record
        .timestamp
        .map(|ts| ts.format(TEXT_TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let level_str = match record.level {
        Some(level) => paint_level(format!("{:5}", level.to_str()), level),
        None => "INFO".to_string(),
    };

    let service = format!("[{}]", record.service.as_deref().unwrap_or("unknown"));

    let mut parts = vec![timestamp_str, level_str, service];
    if let (true, Some(symbol)) = (include_symbol, symbol) {
        parts.push(symbol.to_string());
    }
    parts.push(sanitize_message(&record.message));

    let mut output = parts.join(" ");

    let context_parts: Vec<String> = record
        .context
        .display_fields()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    if !context_parts.is_empty() {
        output.push_str(" | ");
        output.push_str(&context_parts.join(", "));
    }

    output
}
