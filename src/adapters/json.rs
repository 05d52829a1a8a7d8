//! JSON adapter for structured logging

use super::file::LineSink;
use crate::core::{LogAdapter, LogRecord, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Writes each record as a single-line JSON object (JSONL format)
///
/// The pre-formatted text line is ignored; the whole record is serialized,
/// including context, metadata, metrics, error details and tags. Compatible
/// with log aggregation tools like ELK, Loki, etc.
pub struct JsonAdapter {
    sink: LineSink,
}

impl JsonAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            sink: LineSink::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        self.sink.path()
    }
}

#[async_trait]
impl LogAdapter for JsonAdapter {
    fn name(&self) -> &str {
        "json"
    }

    async fn write(&self, record: &LogRecord, _formatted: &str) -> Result<()> {
        let json = record.to_json()?;
        self.sink.write_line(self.name(), &json).await
    }

    async fn close(&self) -> Result<()> {
        self.sink.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogEvent, LogLevel, LoggerError, LoggingContext, PerformanceMetrics};
    use serde_json::{json, Value};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_json_adapter() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.jsonl");

        let adapter = JsonAdapter::new(&log_path);

        let mut record = LogRecord::new(LogLevel::Info, "User logged in", "auth")
            .with_context(LoggingContext::new().with_user_id("u-123").with_field("action", "login"));
        record.event = Some(LogEvent::UserAuth);
        record.metrics = Some(PerformanceMetrics::new().with_duration_ms(8.0));

        adapter.write(&record, "ignored text").await?;
        adapter.close().await?;

        let content = tokio::fs::read_to_string(&log_path).await?;
        let value: Value = serde_json::from_str(content.trim_end())?;
        assert_eq!(value["message"], json!("User logged in"));
        assert_eq!(value["event"], json!("USER_AUTH"));
        assert_eq!(value["context"]["user_id"], json!("u-123"));
        assert_eq!(value["metrics"]["duration_ms"], json!(8.0));
        assert!(!content.contains("ignored text"));

        Ok(())
    }

    #[tokio::test]
    async fn test_json_adapter_multiple_entries() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test_multiple.jsonl");

        let adapter = JsonAdapter::new(&log_path);
        for i in 0..3 {
            let record = LogRecord::new(LogLevel::Debug, format!("entry {}", i), "svc");
            adapter.write(&record, "").await?;
        }
        adapter.close().await?;

        let content = tokio::fs::read_to_string(&log_path).await?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            let value: Value = serde_json::from_str(line)?;
            assert_eq!(value["message"], json!(format!("entry {}", i)));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_write_after_close_fails() {
        let dir = tempdir().expect("Failed to create temp dir");
        let adapter = JsonAdapter::new(dir.path().join("closed.jsonl"));
        adapter.close().await.unwrap();

        let record = LogRecord::new(LogLevel::Info, "late", "svc");
        let err = adapter.write(&record, "").await.unwrap_err();
        assert!(matches!(err, LoggerError::AdapterClosed { .. }));
    }
}
