//! Adapter implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "file")]
pub mod json;

#[cfg(feature = "console")]
pub use console::ConsoleAdapter;
#[cfg(feature = "file")]
pub use file::FileAdapter;
#[cfg(feature = "file")]
pub use json::JsonAdapter;

pub use crate::core::LogAdapter;
