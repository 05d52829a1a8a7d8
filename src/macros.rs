//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and expand to the
//! logger's future, so the call site decides when to `.await` it.
//!
//! # Examples
//!
//! ```
//! use artissist_logger::prelude::*;
//! use artissist_logger::info;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let logger = Logger::builder().service("api").build();
//!
//! // Basic logging
//! info!(logger, "Server started").await;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).await;
//! # }
//! ```

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use artissist_logger::prelude::*;
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// # let logger = Logger::builder().build();
/// use artissist_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").await;
/// log!(logger, LogLevel::Error, "Error code: {}", 500).await;
/// # }
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), $crate::LogOptions::default())
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use artissist_logger::prelude::*;
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// # let logger = Logger::builder().build();
/// use artissist_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5).await;
/// # }
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
