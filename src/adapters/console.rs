//! Console adapter implementation

use crate::core::adapter::compose_line;
use crate::core::{LogAdapter, LogLevel, LogRecord, Result};
use async_trait::async_trait;
use colored::Colorize;
use std::io::Write;

/// Writes formatted lines to the terminal
///
/// `ERROR` records go to stderr, everything else to stdout. Level coloring is
/// off unless enabled with [`with_colors`](ConsoleAdapter::with_colors).
pub struct ConsoleAdapter {
    use_colors: bool,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogAdapter for ConsoleAdapter {
    fn name(&self) -> &str {
        "console"
    }

    async fn write(&self, record: &LogRecord, formatted: &str) -> Result<()> {
        match record.level {
            Some(LogLevel::Error) => eprintln!("{}", formatted),
            _ => println!("{}", formatted),
        }
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        // Flush both since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn format_message(&self, record: &LogRecord, include_symbol: bool, symbol: Option<&str>) -> String {
        if !self.use_colors {
            return compose_line(record, include_symbol, symbol, |padded, _| padded);
        }
        compose_line(record, include_symbol, symbol, |padded, level| {
            padded.color(level.color_code()).to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_format_matches_shared_layout() {
        let adapter = ConsoleAdapter::new();
        let record = LogRecord::new(LogLevel::Warn, "disk low", "svc");

        assert_eq!(
            adapter.format_message(&record, false, None),
            crate::core::format_message(&record, false, None)
        );
    }

    #[test]
    fn test_colored_format_keeps_content() {
        colored::control::set_override(true);
        let adapter = ConsoleAdapter::with_colors(true);
        let record = LogRecord::new(LogLevel::Error, "boom", "svc");

        let line = adapter.format_message(&record, false, None);
        assert!(line.contains("\u{1b}["));
        assert!(line.contains("ERROR"));
        assert!(line.ends_with("[svc] boom"));
    }

    #[tokio::test]
    async fn test_write_and_close_succeed() {
        let adapter = ConsoleAdapter::new();
        let record = LogRecord::new(LogLevel::Info, "hello", "svc");
        let line = adapter.format_message(&record, false, None);

        adapter.write(&record, &line).await.unwrap();
        adapter.close().await.unwrap();
        adapter.close().await.unwrap();
    }
}
