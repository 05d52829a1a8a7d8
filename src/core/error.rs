//! Error types for the logger system
//!
//! These errors are produced by adapters, configuration parsing and the
//! adapter registry. The [`Logger`](crate::Logger) itself never returns them
//! from a logging call; they are reported and discarded at that boundary.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Adapter was used after `close`
    #[error("Adapter '{adapter}' is closed")]
    AdapterClosed { adapter: String },

    /// Adapter-specific write failure
    #[error("Adapter '{adapter}' failed: {message}")]
    AdapterError { adapter: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an error for an adapter used after close
    pub fn adapter_closed(adapter: impl Into<String>) -> Self {
        LoggerError::AdapterClosed {
            adapter: adapter.into(),
        }
    }

    /// Create an adapter failure
    pub fn adapter(adapter: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::AdapterError {
            adapter: adapter.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
