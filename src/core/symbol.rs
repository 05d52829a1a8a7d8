//! Event symbol resolution
//!
//! Maps events to a short visual tag (an emoji) and a description. The
//! default table comes from the shared schema bundled with the crate; callers
//! can layer their own entries on top under arbitrary names.

use super::log_event::LogEvent;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

const DEFAULT_MAPPINGS_JSON: &str = include_str!("../../schema/default_emoji_mappings.json");

/// Symbol and description for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMapping {
    #[serde(rename = "emoji", alias = "symbol")]
    pub symbol: String,
    pub description: String,
    #[serde(default = "default_true")]
    pub is_default: bool,
}

fn default_true() -> bool {
    true
}

impl SymbolMapping {
    /// Create a caller-defined mapping (`is_default` is false)
    pub fn new(symbol: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            description: description.into(),
            is_default: false,
        }
    }
}

/// The schema's default table, parsed once per process
pub fn default_mappings() -> &'static HashMap<LogEvent, SymbolMapping> {
    static DEFAULTS: OnceLock<HashMap<LogEvent, SymbolMapping>> = OnceLock::new();
    DEFAULTS.get_or_init(|| {
        let raw: BTreeMap<String, SymbolMapping> = match serde_json::from_str(DEFAULT_MAPPINGS_JSON)
        {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("[LOGGER ERROR] Default symbol table is invalid: {}", e);
                return HashMap::new();
            }
        };

        raw.into_iter()
            .filter_map(|(name, mapping)| match name.parse::<LogEvent>() {
                Ok(event) => Some((event, mapping)),
                Err(_) => {
                    eprintln!(
                        "[LOGGER WARNING] Default symbol table names unknown event '{}'",
                        name
                    );
                    None
                }
            })
            .collect()
    })
}

/// Resolves events to symbols and descriptions
///
/// Lookup is two-tier: an enumerated event is looked up in the default
/// table first; the custom table is consulted by name only when no
/// enumerated event was given or it had no default entry. Misses are
/// reported as `None`, never as errors.
///
/// Thread-safe: custom mappings can be changed while other threads resolve.
///
/// # Example
///
/// ```
/// use artissist_logger::{LogEvent, SymbolMapping, SymbolResolver};
///
/// let resolver = SymbolResolver::new();
/// resolver.add_custom_mapping("cache_warm", SymbolMapping::new("🔥", "Cache warm-up"));
///
/// assert_eq!(resolver.get_symbol(Some(LogEvent::SystemStart), None).as_deref(), Some("🚀"));
/// assert_eq!(resolver.get_symbol(None, Some("cache_warm")).as_deref(), Some("🔥"));
/// assert_eq!(resolver.get_symbol(None, Some("nope")), None);
/// ```
#[derive(Debug, Default)]
pub struct SymbolResolver {
    custom: RwLock<HashMap<String, SymbolMapping>>,
}

impl SymbolResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver pre-loaded with custom mappings
    pub fn with_custom_mappings(mappings: HashMap<String, SymbolMapping>) -> Self {
        Self {
            custom: RwLock::new(mappings),
        }
    }

    fn resolve<T>(
        &self,
        event: Option<LogEvent>,
        custom_event: Option<&str>,
        field: impl Fn(&SymbolMapping) -> T,
    ) -> Option<T> {
        if let Some(mapping) = event.and_then(|e| default_mappings().get(&e)) {
            return Some(field(mapping));
        }

        let name = custom_event?;
        self.custom.read().get(name).map(field)
    }

    pub fn get_symbol(&self, event: Option<LogEvent>, custom_event: Option<&str>) -> Option<String> {
        self.resolve(event, custom_event, |m| m.symbol.clone())
    }

    pub fn get_description(
        &self,
        event: Option<LogEvent>,
        custom_event: Option<&str>,
    ) -> Option<String> {
        self.resolve(event, custom_event, |m| m.description.clone())
    }

    /// Add or replace a custom mapping
    pub fn add_custom_mapping(&self, name: impl Into<String>, mapping: SymbolMapping) {
        self.custom.write().insert(name.into(), mapping);
    }

    /// Remove a custom mapping, returning whether it existed
    pub fn remove_custom_mapping(&self, name: &str) -> bool {
        self.custom.write().remove(name).is_some()
    }

    /// Every known mapping keyed by name
    ///
    /// Default entries are keyed by their schema event name. Custom entries
    /// are applied last and shadow a default entry with the same name.
    pub fn list_all_mappings(&self) -> BTreeMap<String, SymbolMapping> {
        let mut all: BTreeMap<String, SymbolMapping> = default_mappings()
            .iter()
            .map(|(event, mapping)| (event.as_str().to_string(), mapping.clone()))
            .collect();

        let custom = self.custom.read();
        all.extend(custom.iter().map(|(k, v)| (k.clone(), v.clone())));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_every_event() {
        let defaults = default_mappings();
        for event in LogEvent::ALL {
            let mapping = defaults.get(&event).expect("event missing from schema table");
            assert!(!mapping.symbol.is_empty());
            assert!(mapping.is_default);
        }
    }

    #[test]
    fn test_schema_glyphs_are_authoritative() {
        let resolver = SymbolResolver::new();
        assert_eq!(resolver.get_symbol(Some(LogEvent::AssetProcessing), None).as_deref(), Some("📸"));
        assert_eq!(resolver.get_symbol(Some(LogEvent::ExternalService), None).as_deref(), Some("🌐"));
        assert_eq!(resolver.get_symbol(Some(LogEvent::NotificationSent), None).as_deref(), Some("📧"));
    }

    #[test]
    fn test_enumerated_match_wins_over_custom() {
        let resolver = SymbolResolver::new();
        resolver.add_custom_mapping("API_REQUEST", SymbolMapping::new("🧪", "shadow"));

        let symbol = resolver.get_symbol(Some(LogEvent::ApiRequest), Some("API_REQUEST"));
        assert_eq!(symbol.as_deref(), Some("🔄"));

        let description = resolver.get_description(Some(LogEvent::ApiRequest), Some("API_REQUEST"));
        assert_eq!(description.as_deref(), Some("API request/response events"));
    }

    #[test]
    fn test_silent_absence() {
        let resolver = SymbolResolver::new();
        assert_eq!(resolver.get_symbol(None, Some("nope")), None);
        assert_eq!(resolver.get_symbol(None, None), None);
        assert_eq!(resolver.get_description(None, None), None);
    }

    #[test]
    fn test_custom_add_overwrite_remove() {
        let resolver = SymbolResolver::new();
        resolver.add_custom_mapping("deploy_canary", SymbolMapping::new("🐤", "Canary"));
        resolver.add_custom_mapping("deploy_canary", SymbolMapping::new("🐥", "Canary v2"));

        assert_eq!(resolver.get_symbol(None, Some("deploy_canary")).as_deref(), Some("🐥"));
        assert!(resolver.remove_custom_mapping("deploy_canary"));
        assert!(!resolver.remove_custom_mapping("deploy_canary"));
        assert_eq!(resolver.get_symbol(None, Some("deploy_canary")), None);
    }

    #[test]
    fn test_list_all_custom_shadows_default() {
        let resolver = SymbolResolver::new();
        resolver.add_custom_mapping("SYSTEM_START", SymbolMapping::new("🏁", "custom start"));
        resolver.add_custom_mapping("batch_done", SymbolMapping::new("✅", "Batch finished"));

        let all = resolver.list_all_mappings();
        assert_eq!(all.len(), LogEvent::ALL.len() + 1);
        assert_eq!(all["SYSTEM_START"].symbol, "🏁");
        assert!(!all["SYSTEM_START"].is_default);
        assert_eq!(all["batch_done"].description, "Batch finished");
    }
}
