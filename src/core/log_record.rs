//! Log record structure

use super::log_context::LoggingContext;
use super::log_event::LogEvent;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Open key/value metadata attached to a record
pub type LogMetadata = Map<String, Value>;

/// Timing and measurement values for a record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_metrics: BTreeMap<String, f64>,
}

impl PerformanceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.custom_metrics.insert(name.into(), value);
        self
    }
}

/// Error information attached to a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<LogMetadata>,
}

impl ErrorDetails {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            stack_trace: None,
            context: None,
        }
    }

    /// Describe a Rust error value
    ///
    /// The error type name becomes the kind and the `source()` chain, one
    /// cause per line, becomes the stack trace.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::from_error_with_kind(short_type_name(std::any::type_name::<E>()), error)
    }

    /// Describe a Rust error value under an explicit kind name
    pub fn from_error_with_kind<E>(error_type: impl Into<String>, error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(format!("caused by: {}", cause));
            source = cause.source();
        }

        Self {
            error_type: error_type.into(),
            message: error.to_string(),
            stack_trace: (!causes.is_empty()).then(|| causes.join("\n")),
            context: None,
        }
    }

    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    pub fn with_context_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// One emitted log entry
///
/// Built by the logger and handed read-only to every adapter.
/// `timestamp`, `level` and `service` are always set on records the logger
/// creates; they are optional so records from other producers still format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: Option<DateTime<Utc>>,
    pub level: Option<LogLevel>,
    pub message: String,
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<LogEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_event: Option<String>,
    #[serde(default)]
    pub context: LoggingContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LogMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<PerformanceMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            timestamp: Some(Utc::now()),
            level: Some(level),
            message: message.into(),
            service: Some(service.into()),
            event: None,
            custom_event: None,
            context: LoggingContext::default(),
            metadata: None,
            metrics: None,
            error: None,
            tags: None,
        }
    }

    pub fn with_context(mut self, context: LoggingContext) -> Self {
        self.context = context;
        self
    }

    /// Serialize as a single-line JSON object
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Last path segment of a type name, without generic arguments
///
/// `app::Wrapper<std::io::Error>` gives `Wrapper`, `dyn core::error::Error`
/// gives `Error`.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    let base = base.split(" + ").next().unwrap_or(base);
    let base = base.trim_start_matches('&').trim_start_matches("dyn ").trim();
    match base.rsplit("::").next() {
        Some(name) if !name.is_empty() => name,
        _ => "Error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_record_is_fully_stamped() {
        let record = LogRecord::new(LogLevel::Warn, "disk low", "svc");
        assert!(record.timestamp.is_some());
        assert_eq!(record.level, Some(LogLevel::Warn));
        assert_eq!(record.service.as_deref(), Some("svc"));
        assert!(record.context.is_empty());
    }

    #[test]
    fn test_message_is_stored_verbatim() {
        let record = LogRecord::new(LogLevel::Info, "line1\nline2\tx", "svc");
        assert_eq!(record.message, "line1\nline2\tx");
    }

    #[test]
    fn test_error_details_from_error_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
        let details = ErrorDetails::from_error(&io);

        assert_eq!(details.error_type, "Error");
        assert!(details.message.contains("config.toml missing"));
    }

    #[derive(Debug)]
    struct Wrapper<T>(T);

    impl<T: std::fmt::Debug> std::fmt::Display for Wrapper<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "wrapped {:?}", self.0)
        }
    }

    impl<T: std::fmt::Debug> std::error::Error for Wrapper<T> {}

    #[test]
    fn test_error_details_generic_type_name() {
        let err = Wrapper(std::io::Error::new(std::io::ErrorKind::Other, "inner"));
        let details = ErrorDetails::from_error(&err);
        assert_eq!(details.error_type, "Wrapper");
        assert!(details.message.starts_with("wrapped"));

        let boxed: Box<dyn std::error::Error> = Box::new(Wrapper(7u8));
        assert_eq!(ErrorDetails::from_error(boxed.as_ref()).error_type, "Error");

        assert_eq!(short_type_name("alloc::vec::Vec<app::Item<u8>>"), "Vec");
        assert_eq!(short_type_name("Plain"), "Plain");
        assert_eq!(
            short_type_name("dyn core::error::Error + core::marker::Send + core::marker::Sync"),
            "Error"
        );
    }

    #[test]
    fn test_error_details_explicit_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let details = ErrorDetails::from_error_with_kind("ConfigMissing", &io);
        assert_eq!(details.error_type, "ConfigMissing");
        assert_eq!(details.message, "gone");
    }

    #[test]
    fn test_error_details_context() {
        let details = ErrorDetails::new("ValueError", "bad input")
            .with_context_field("operation", "list_projects");
        assert_eq!(
            details.context.unwrap().get("operation"),
            Some(&json!("list_projects"))
        );
    }

    #[test]
    fn test_json_omits_absent_sections() {
        let record = LogRecord::new(LogLevel::Info, "hello", "svc");
        let value: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        assert_eq!(value["level"], json!("INFO"));
        assert_eq!(value["service"], json!("svc"));
        assert!(value.get("metadata").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_metrics_builder() {
        let metrics = PerformanceMetrics::new()
            .with_duration_ms(12.5)
            .with_metric("status_code", 200.0);
        assert_eq!(metrics.duration_ms, Some(12.5));
        assert_eq!(metrics.custom_metrics.get("status_code"), Some(&200.0));
    }
}
