//! Declarative logger configuration

use super::error::Result;
use super::log_context::LoggingContext;
use super::log_level::LogLevel;
use super::logger::{DEFAULT_ENVIRONMENT, DEFAULT_SERVICE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Settings for building a [`Logger`](crate::Logger) through
/// [`LoggerFactory`](crate::LoggerFactory)
///
/// Every field has a default, so partial JSON documents are accepted:
///
/// ```
/// use artissist_logger::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{
///     "service": "api",
///     "adapters": ["console", "file"],
///     "min_level": "INFO",
///     "context": { "correlation_id": "boot" },
///     "adapter_config": { "file": { "file_path": "logs/api.log" } }
/// }"#).unwrap();
///
/// assert_eq!(config.environment, "dev");
/// assert_eq!(config.min_level, LogLevel::Info);
/// assert_eq!(config.adapter_setting("file", "file_path").and_then(|v| v.as_str()), Some("logs/api.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub service: String,
    pub environment: String,
    /// Adapter names resolved through the registry, in dispatch order
    pub adapters: Vec<String>,
    pub emojis: bool,
    pub context: LoggingContext,
    pub min_level: LogLevel,
    /// Per-adapter settings keyed by adapter name
    pub adapter_config: HashMap<String, Value>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            adapters: vec!["console".to_string()],
            emojis: false,
            context: LoggingContext::default(),
            min_level: LogLevel::Debug,
            adapter_config: HashMap::new(),
        }
    }
}

impl LoggerConfig {
    pub fn new(service: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            environment: environment.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_adapters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adapters = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_emojis(mut self, enabled: bool) -> Self {
        self.emojis = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_context(mut self, context: LoggingContext) -> Self {
        self.context = context;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set one setting for one adapter
    #[must_use = "builder methods return a new value"]
    pub fn with_adapter_setting(
        mut self,
        adapter: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let entry = self
            .adapter_config
            .entry(adapter.into())
            .or_insert_with(|| Value::Object(Default::default()));
        if !entry.is_object() {
            *entry = Value::Object(Default::default());
        }
        if let Value::Object(map) = entry {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Settings object for `adapter`, if any
    pub fn adapter_settings(&self, adapter: &str) -> Option<&Value> {
        self.adapter_config.get(adapter)
    }

    pub fn adapter_setting(&self, adapter: &str, key: &str) -> Option<&Value> {
        self.adapter_settings(adapter)?.get(key)
    }
}
