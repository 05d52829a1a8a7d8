//! Well-known event identifiers from the shared logging schema

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumerated event kinds
///
/// Each variant has a stable schema name (`SYSTEM_START`, `API_REQUEST`, ...)
/// used as its key in the default symbol table and in serialized records.
/// Events that are not part of the schema are logged as custom event names
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogEvent {
    SystemStart,
    SystemStop,
    UserAuth,
    UserAuthz,
    ProjectLifecycle,
    DatabaseOperation,
    ApiRequest,
    PerformanceMetric,
    ErrorOccurred,
    WarningIssued,
    ConfigChange,
    AnalyticsEvent,
    AgentProcessing,
    ConversationEvent,
    AssetProcessing,
    InspirationEvent,
    InfrastructureDeploy,
    BusinessMetric,
    SearchOperation,
    BackgroundJob,
    NotificationSent,
    SecurityEvent,
    ScheduledTask,
    ExternalService,
    AuditTrail,
}

impl LogEvent {
    pub const ALL: [LogEvent; 25] = [
        LogEvent::SystemStart,
        LogEvent::SystemStop,
        LogEvent::UserAuth,
        LogEvent::UserAuthz,
        LogEvent::ProjectLifecycle,
        LogEvent::DatabaseOperation,
        LogEvent::ApiRequest,
        LogEvent::PerformanceMetric,
        LogEvent::ErrorOccurred,
        LogEvent::WarningIssued,
        LogEvent::ConfigChange,
        LogEvent::AnalyticsEvent,
        LogEvent::AgentProcessing,
        LogEvent::ConversationEvent,
        LogEvent::AssetProcessing,
        LogEvent::InspirationEvent,
        LogEvent::InfrastructureDeploy,
        LogEvent::BusinessMetric,
        LogEvent::SearchOperation,
        LogEvent::BackgroundJob,
        LogEvent::NotificationSent,
        LogEvent::SecurityEvent,
        LogEvent::ScheduledTask,
        LogEvent::ExternalService,
        LogEvent::AuditTrail,
    ];

    /// Schema name of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            LogEvent::SystemStart => "SYSTEM_START",
            LogEvent::SystemStop => "SYSTEM_STOP",
            LogEvent::UserAuth => "USER_AUTH",
            LogEvent::UserAuthz => "USER_AUTHZ",
            LogEvent::ProjectLifecycle => "PROJECT_LIFECYCLE",
            LogEvent::DatabaseOperation => "DATABASE_OPERATION",
            LogEvent::ApiRequest => "API_REQUEST",
            LogEvent::PerformanceMetric => "PERFORMANCE_METRIC",
            LogEvent::ErrorOccurred => "ERROR_OCCURRED",
            LogEvent::WarningIssued => "WARNING_ISSUED",
            LogEvent::ConfigChange => "CONFIG_CHANGE",
            LogEvent::AnalyticsEvent => "ANALYTICS_EVENT",
            LogEvent::AgentProcessing => "AGENT_PROCESSING",
            LogEvent::ConversationEvent => "CONVERSATION_EVENT",
            LogEvent::AssetProcessing => "ASSET_PROCESSING",
            LogEvent::InspirationEvent => "INSPIRATION_EVENT",
            LogEvent::InfrastructureDeploy => "INFRASTRUCTURE_DEPLOY",
            LogEvent::BusinessMetric => "BUSINESS_METRIC",
            LogEvent::SearchOperation => "SEARCH_OPERATION",
            LogEvent::BackgroundJob => "BACKGROUND_JOB",
            LogEvent::NotificationSent => "NOTIFICATION_SENT",
            LogEvent::SecurityEvent => "SECURITY_EVENT",
            LogEvent::ScheduledTask => "SCHEDULED_TASK",
            LogEvent::ExternalService => "EXTERNAL_SERVICE",
            LogEvent::AuditTrail => "AUDIT_TRAIL",
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_uppercase();
        LogEvent::ALL
            .iter()
            .copied()
            .find(|event| event.as_str() == wanted)
            .ok_or_else(|| format!("Unknown log event: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_match_serde() {
        for event in LogEvent::ALL {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.as_str()));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("api_request".parse::<LogEvent>(), Ok(LogEvent::ApiRequest));
        assert!("not_an_event".parse::<LogEvent>().is_err());
    }
}
