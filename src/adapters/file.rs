//! File adapter implementation
//!
//! Uses tokio::fs so writes never block the runtime. The file is opened on
//! first write, not at construction, so a logger can be built before its log
//! directory exists.

use crate::core::{LogAdapter, LogRecord, LoggerError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::Mutex;

#[derive(Default)]
struct SinkState {
    writer: Option<BufWriter<File>>,
    closed: bool,
}

/// Append-only line writer shared by the file-backed adapters
pub(crate) struct LineSink {
    path: PathBuf,
    state: Mutex<SinkState>,
}

impl LineSink {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: Mutex::new(SinkState::default()),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    async fn open(&self) -> Result<BufWriter<File>> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                LoggerError::io_operation("creating log directory", parent.display().to_string(), e)
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                LoggerError::io_operation("opening log file", self.path.display().to_string(), e)
            })?;

        Ok(BufWriter::new(file))
    }

    /// Append `line` plus a newline, opening the file if needed
    pub(crate) async fn write_line(&self, adapter: &str, line: &str) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.closed {
            return Err(LoggerError::adapter_closed(adapter));
        }

        if state.writer.is_none() {
            let writer = self.open().await?;
            state.writer = Some(writer);
        }

        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        if let Some(writer) = state.writer.as_mut() {
            writer.write_all(buf.as_bytes()).await?;
            writer.flush().await?;
        }
        Ok(())
    }

    /// Flush and release the handle; later calls are no-ops
    pub(crate) async fn close(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.closed {
            return Ok(());
        }
        state.closed = true;

        if let Some(mut writer) = state.writer.take() {
            writer.flush().await?;
            writer.shutdown().await?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) async fn is_open(&self) -> bool {
        self.state.lock().await.writer.is_some()
    }
}

/// Appends formatted lines to a log file
///
/// # Example
///
/// ```no_run
/// use artissist_logger::prelude::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let logger = Logger::builder()
///     .service("worker")
///     .adapter(FileAdapter::new("logs/worker.log"))
///     .build();
///
/// logger.info("job finished").await;
/// logger.close().await;
/// # }
/// ```
pub struct FileAdapter {
    sink: LineSink,
}

impl FileAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            sink: LineSink::new(path.into()),
        }
    }

    /// Get the log file path
    pub fn path(&self) -> &Path {
        self.sink.path()
    }
}

#[async_trait]
impl LogAdapter for FileAdapter {
    fn name(&self) -> &str {
        "file"
    }

    async fn write(&self, _record: &LogRecord, formatted: &str) -> Result<()> {
        self.sink.write_line(self.name(), formatted).await
    }

    async fn close(&self) -> Result<()> {
        self.sink.close().await
    }
}
