//! Correlation context for log records
//!
//! This module provides:
//! - `LoggingContext`: correlation/tracing identifiers plus custom fields,
//!   treated as an immutable value with a pure `merge`
//! - the ambient "current" context, a task-local slot installed for the
//!   duration of one unit of work via [`scope_context`]

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

/// Field names routed to typed slots by [`LoggingContext::from_fields`]
pub const CORRELATION_ID: &str = "correlation_id";
pub const USER_ID: &str = "user_id";
pub const SESSION_ID: &str = "session_id";
pub const REQUEST_ID: &str = "request_id";
pub const TRACE_ID: &str = "trace_id";
pub const SPAN_ID: &str = "span_id";

/// Correlation and tracing context attached to every log record
///
/// Merging is field-wise last-write-wins: a field set in the right-hand
/// context replaces the left-hand value, unset fields are inherited.
/// Custom fields are shallow-merged with right-hand keys winning.
///
/// # Example
///
/// ```
/// use artissist_logger::LoggingContext;
///
/// let base = LoggingContext::new().with_correlation_id("abc");
/// let call = LoggingContext::new().with_user_id("u1");
///
/// let merged = base.merge(&call);
/// assert_eq!(merged.correlation_id.as_deref(), Some("abc"));
/// assert_eq!(merged.user_id.as_deref(), Some("u1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_id: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, Value>,
}

impl LoggingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from loose key/value pairs
    ///
    /// The six tracing keys (`correlation_id`, `user_id`, `session_id`,
    /// `request_id`, `trace_id`, `span_id`) fill their typed slots; a
    /// non-string value for one of them is stored by its JSON text. Any other
    /// key lands in the custom map.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut ctx = Self::new();
        for (key, value) in fields {
            ctx.set_field(key, value);
        }
        ctx
    }

    fn set_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let slot = match key.as_str() {
            CORRELATION_ID => &mut self.correlation_id,
            USER_ID => &mut self.user_id,
            SESSION_ID => &mut self.session_id,
            REQUEST_ID => &mut self.request_id,
            TRACE_ID => &mut self.trace_id,
            SPAN_ID => &mut self.span_id,
            _ => {
                self.custom.insert(key, value);
                return;
            }
        };
        *slot = match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        };
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn with_user_id(mut self, id: impl Into<String>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    pub fn with_session_id(mut self, id: impl Into<String>) -> Self {
        self.session_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    pub fn with_span_id(mut self, id: impl Into<String>) -> Self {
        self.span_id = Some(id.into());
        self
    }

    /// Add a custom field
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Merge `other` on top of `self`, returning a new context
    #[must_use]
    pub fn merge(&self, other: &LoggingContext) -> LoggingContext {
        let mut custom = self.custom.clone();
        custom.extend(other.custom.iter().map(|(k, v)| (k.clone(), v.clone())));

        LoggingContext {
            correlation_id: pick(&self.correlation_id, &other.correlation_id),
            user_id: pick(&self.user_id, &other.user_id),
            session_id: pick(&self.session_id, &other.session_id),
            request_id: pick(&self.request_id, &other.request_id),
            trace_id: pick(&self.trace_id, &other.trace_id),
            span_id: pick(&self.span_id, &other.span_id),
            custom,
        }
    }

    /// Check if no field is set
    pub fn is_empty(&self) -> bool {
        self.correlation_id.is_none()
            && self.user_id.is_none()
            && self.session_id.is_none()
            && self.request_id.is_none()
            && self.trace_id.is_none()
            && self.span_id.is_none()
            && self.custom.is_empty()
    }

    /// The correlation fields shown in text output, in display order
    pub fn display_fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (CORRELATION_ID, self.correlation_id.as_deref()),
            (USER_ID, self.user_id.as_deref()),
            (REQUEST_ID, self.request_id.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

fn pick(base: &Option<String>, over: &Option<String>) -> Option<String> {
    over.as_ref().or(base.as_ref()).cloned()
}

impl fmt::Display for LoggingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .display_fields()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

tokio::task_local! {
    static CURRENT_CONTEXT: LoggingContext;
}

/// Run `fut` with `ctx` installed as the ambient context
///
/// The context is visible to every log call made while `fut` is polled and
/// is removed when `fut` completes, returns early, or panics. A scope opened
/// inside another scope sees the outer context merged with `ctx`. Tasks
/// spawned from inside the scope do not inherit it.
///
/// # Example
///
/// ```
/// use artissist_logger::{current_context, scope_context, LoggingContext};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let ctx = LoggingContext::new().with_request_id("req-1");
/// scope_context(ctx, async {
///     let current = current_context().unwrap();
///     assert_eq!(current.request_id.as_deref(), Some("req-1"));
/// })
/// .await;
/// assert!(current_context().is_none());
/// # }
/// ```
pub async fn scope_context<F>(ctx: LoggingContext, fut: F) -> F::Output
where
    F: Future,
{
    let effective = match current_context() {
        Some(outer) => outer.merge(&ctx),
        None => ctx,
    };
    CURRENT_CONTEXT.scope(effective, fut).await
}

/// Synchronous counterpart of [`scope_context`]
pub fn sync_scope_context<F, R>(ctx: LoggingContext, f: F) -> R
where
    F: FnOnce() -> R,
{
    let effective = match current_context() {
        Some(outer) => outer.merge(&ctx),
        None => ctx,
    };
    CURRENT_CONTEXT.sync_scope(effective, f)
}

/// The ambient context of the current unit of work, if any
pub fn current_context() -> Option<LoggingContext> {
    CURRENT_CONTEXT.try_with(Clone::clone).ok()
}
