//! Building loggers from configuration
//!
//! Adapter names in a [`LoggerConfig`] are resolved through an
//! [`AdapterRegistry`]. The built-in names are `console`, `file` and `json`
//! (subject to cargo features); applications can register their own.

use super::adapter::LogAdapter;
use super::config::LoggerConfig;
use super::error::{LoggerError, Result};
use super::log_context::LoggingContext;
use super::logger::Logger;
use std::collections::HashMap;
use std::sync::Arc;

/// Creates one adapter from the logger configuration
pub type AdapterConstructor = Box<dyn Fn(&LoggerConfig) -> Result<Arc<dyn LogAdapter>> + Send + Sync>;

/// Name → constructor table for adapters
#[derive(Default)]
pub struct AdapterRegistry {
    constructors: HashMap<String, AdapterConstructor>,
}

impl AdapterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in adapters
    pub fn with_defaults() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();

        #[cfg(feature = "console")]
        registry.register("console", |config| {
            let use_colors = match config.adapter_setting("console", "use_colors") {
                None => false,
                Some(value) => value.as_bool().ok_or_else(|| {
                    LoggerError::config("console", "use_colors must be a boolean")
                })?,
            };
            Ok(Arc::new(crate::adapters::ConsoleAdapter::with_colors(use_colors)))
        });

        #[cfg(feature = "file")]
        registry.register("file", |config| {
            let path = file_path_setting(config, "file", "log")?;
            Ok(Arc::new(crate::adapters::FileAdapter::new(path)))
        });

        #[cfg(feature = "file")]
        registry.register("json", |config| {
            let path = file_path_setting(config, "json", "jsonl")?;
            Ok(Arc::new(crate::adapters::JsonAdapter::new(path)))
        });

        registry
    }

    /// Register a constructor, replacing any previous one under `name`
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn(&LoggerConfig) -> Result<Arc<dyn LogAdapter>> + Send + Sync + 'static,
    {
        self.constructors.insert(name.into(), Box::new(constructor));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct the adapter registered under `name`
    pub fn create(&self, name: &str, config: &LoggerConfig) -> Result<Arc<dyn LogAdapter>> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| LoggerError::config("adapters", format!("unknown adapter '{}'", name)))?;
        constructor(config)
    }

    /// Resolve every configured name, skipping the ones that fail
    fn resolve(&self, config: &LoggerConfig) -> Vec<Arc<dyn LogAdapter>> {
        config
            .adapters
            .iter()
            .filter_map(|name| match self.create(name, config) {
                Ok(adapter) => Some(adapter),
                Err(e) => {
                    eprintln!("[LOGGER WARNING] Skipping adapter '{}': {}", name, e);
                    None
                }
            })
            .collect()
    }
}

#[cfg(feature = "file")]
fn file_path_setting(config: &LoggerConfig, adapter: &str, extension: &str) -> Result<String> {
    match config.adapter_setting(adapter, "file_path") {
        None => Ok(format!("logs/{}.{}", config.service, extension)),
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| LoggerError::config(adapter, "file_path must be a string")),
    }
}

/// Entry points for building loggers from configuration
pub struct LoggerFactory;

impl LoggerFactory {
    /// Build a logger using the built-in adapters
    pub fn create(config: &LoggerConfig) -> Logger {
        Self::create_with(config, &AdapterRegistry::with_defaults(), Vec::new())
    }

    /// Build a logger resolving names through `registry`
    pub fn create_with_registry(config: &LoggerConfig, registry: &AdapterRegistry) -> Logger {
        Self::create_with(config, registry, Vec::new())
    }

    /// Build a logger from built-in adapter names plus ready-made adapters
    ///
    /// Named adapters come first, in configuration order, followed by
    /// `instances`.
    pub fn create_with_adapters(config: &LoggerConfig, instances: Vec<Arc<dyn LogAdapter>>) -> Logger {
        Self::create_with(config, &AdapterRegistry::with_defaults(), instances)
    }

    pub fn create_with(
        config: &LoggerConfig,
        registry: &AdapterRegistry,
        instances: Vec<Arc<dyn LogAdapter>>,
    ) -> Logger {
        let builder = Logger::builder()
            .service(config.service.clone())
            .environment(config.environment.clone())
            .emojis(config.emojis)
            .min_level(config.min_level)
            .context(config.context.clone());

        registry
            .resolve(config)
            .into_iter()
            .chain(instances)
            .fold(builder, |builder, adapter| builder.shared_adapter(adapter))
            .build()
    }

    /// Preset for backend services
    ///
    /// ```no_run
    /// use artissist_logger::{LoggerFactory, LoggingContext};
    ///
    /// let logger = LoggerFactory::create_backend_logger(
    ///     "backend-api",
    ///     "development",
    ///     true,
    ///     Some(LoggingContext::new().with_field("service_version", "1.0.0")),
    ///     &["console", "file"],
    /// );
    /// ```
    pub fn create_backend_logger(
        service: &str,
        environment: &str,
        emojis: bool,
        context: Option<LoggingContext>,
        adapters: &[&str],
    ) -> Logger {
        let config = LoggerConfig::new(service, environment)
            .with_emojis(emojis)
            .with_context(context.unwrap_or_default())
            .with_adapters(adapters.iter().copied());
        Self::create(&config)
    }

    /// Preset for agents: the agent id is the service name and the agent
    /// type and session travel in the base context
    pub fn create_agent_logger(
        agent_id: &str,
        agent_type: &str,
        environment: &str,
        emojis: bool,
        context: Option<LoggingContext>,
        session_id: Option<&str>,
    ) -> Logger {
        let mut agent_context = LoggingContext::new().with_field("agent_type", agent_type);
        if let Some(session_id) = session_id {
            agent_context = agent_context.with_session_id(session_id);
        }
        let context = context.unwrap_or_default().merge(&agent_context);

        let config = LoggerConfig::new(agent_id, environment)
            .with_emojis(emojis)
            .with_context(context)
            .with_adapters(["console"]);
        Self::create(&config)
    }
}
