//! Property-based tests for artissist_logger using proptest

use artissist_logger::prelude::*;
use proptest::prelude::*;
use serde_json::Value;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

fn any_context() -> impl Strategy<Value = LoggingContext> {
    (
        proptest::option::of("[a-z0-9-]{1,12}"),
        proptest::option::of("[a-z0-9-]{1,12}"),
        proptest::option::of("[a-z0-9-]{1,12}"),
        proptest::option::of("[a-z0-9-]{1,12}"),
        proptest::collection::btree_map("[a-z_]{1,8}", "[a-z]{0,8}", 0..4),
    )
        .prop_map(|(correlation, user, session, request, custom)| LoggingContext {
            correlation_id: correlation,
            user_id: user,
            session_id: session,
            request_id: request,
            trace_id: None,
            span_id: None,
            custom: custom.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
        })
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Level names roundtrip through parsing, in any letter case
    #[test]
    fn test_log_level_str_roundtrip(level in any_level(), lower in any::<bool>()) {
        let text = if lower { level.to_str().to_lowercase() } else { level.to_str().to_string() };
        let parsed: LogLevel = text.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Ordering follows severity
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;
        prop_assert_eq!(level1 <= level2, val1 <= val2);
    }
}

// ============================================================================
// LoggingContext merge Tests
// ============================================================================

proptest! {
    /// Right-hand values win wherever they are set
    #[test]
    fn test_merge_last_write_wins(a in any_context(), b in any_context()) {
        let merged = a.merge(&b);

        prop_assert_eq!(&merged.correlation_id, &b.correlation_id.clone().or_else(|| a.correlation_id.clone()));
        prop_assert_eq!(&merged.user_id, &b.user_id.clone().or_else(|| a.user_id.clone()));
        prop_assert_eq!(&merged.session_id, &b.session_id.clone().or_else(|| a.session_id.clone()));
        prop_assert_eq!(&merged.request_id, &b.request_id.clone().or_else(|| a.request_id.clone()));

        for (key, value) in &b.custom {
            prop_assert_eq!(merged.custom.get(key), Some(value));
        }
        for (key, value) in &a.custom {
            if !b.custom.contains_key(key) {
                prop_assert_eq!(merged.custom.get(key), Some(value));
            }
        }
    }

    /// Merging a chain left to right equals merging pairwise
    #[test]
    fn test_merge_is_associative(a in any_context(), b in any_context(), c in any_context()) {
        prop_assert_eq!(a.merge(&b).merge(&c), a.merge(&b.merge(&c)));
    }

    /// The empty context is an identity on both sides
    #[test]
    fn test_merge_identity(a in any_context()) {
        let empty = LoggingContext::default();
        prop_assert_eq!(a.merge(&empty), a.clone());
        prop_assert_eq!(empty.merge(&a), a);
    }

    /// Merge never mutates its operands
    #[test]
    fn test_merge_is_pure(a in any_context(), b in any_context()) {
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = a.merge(&b);
        prop_assert_eq!(a, a_before);
        prop_assert_eq!(b, b_before);
    }
}

// ============================================================================
// Event and symbol Tests
// ============================================================================

proptest! {
    /// Unregistered custom names never resolve
    #[test]
    fn test_unknown_custom_names_resolve_to_none(name in "[a-z]{1,16}_custom") {
        let resolver = SymbolResolver::new();
        prop_assert!(resolver.get_symbol(None, Some(&name)).is_none());
        prop_assert!(resolver.get_description(None, Some(&name)).is_none());
    }

    /// Every enumerated event has a default symbol, whatever custom name is passed
    #[test]
    fn test_enumerated_events_always_resolve(index in 0usize..LogEvent::ALL.len(), name in "[A-Z_]{1,16}") {
        let resolver = SymbolResolver::new();
        resolver.add_custom_mapping(name.clone(), SymbolMapping::new("🧪", "experiment"));
        let event = LogEvent::ALL[index];
        let symbol = resolver.get_symbol(Some(event), Some(&name));
        prop_assert!(symbol.is_some());
        prop_assert_ne!(symbol.as_deref(), Some("🧪"));
    }
}
