//! Product analytics — a pluggable event sink injected through `AppState`.
//!
//! Handlers receive the sink explicitly; there is no process-wide tracker.
//! Default: `TracingAnalytics` (structured log records under the `analytics` target).
//! `NoopAnalytics` when `ANALYTICS_ENABLED=false`.

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::quiz::vocabulary::{EducationLevel, GoalTag};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    QuizCompleted {
        session_id: Uuid,
        recommended: Vec<String>,
        has_matches: bool,
        education: EducationLevel,
        goal: GoalTag,
    },
    QuizRejected {
        reason: String,
    },
    MajorViewed {
        major_id: String,
    },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::QuizCompleted { .. } => "quiz_completed",
            AnalyticsEvent::QuizRejected { .. } => "quiz_rejected",
            AnalyticsEvent::MajorViewed { .. } => "major_viewed",
        }
    }
}

/// Carried in `AppState` as `Arc<dyn Analytics>`. Tracking never fails the request.
#[async_trait]
pub trait Analytics: Send + Sync {
    async fn track(&self, event: AnalyticsEvent);
}

pub struct TracingAnalytics;

#[async_trait]
impl Analytics for TracingAnalytics {
    async fn track(&self, event: AnalyticsEvent) {
        let payload = serde_json::to_string(&event).unwrap_or_default();
        info!(target: "analytics", event = event.name(), %payload, "analytics event");
    }
}

pub struct NoopAnalytics;

#[async_trait]
impl Analytics for NoopAnalytics {
    async fn track(&self, _event: AnalyticsEvent) {}
}

/// Collects events in memory so handler tests can assert on them.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingAnalytics {
    pub events: std::sync::Mutex<Vec<AnalyticsEvent>>,
}

#[cfg(test)]
#[async_trait]
impl Analytics for RecordingAnalytics {
    async fn track(&self, event: AnalyticsEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_tag() {
        let event = AnalyticsEvent::MajorViewed {
            major_id: "cs".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "major_viewed");
        assert_eq!(json["major_id"], "cs");
    }

    #[test]
    fn test_quiz_completed_payload_uses_wire_strings() {
        let event = AnalyticsEvent::QuizCompleted {
            session_id: Uuid::nil(),
            recommended: vec!["cs".to_string()],
            has_matches: true,
            education: EducationLevel::FourYear,
            goal: GoalTag::HighIncome,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["education"], "4year");
        assert_eq!(json["goal"], "Make a high income");
        assert_eq!(event.name(), "quiz_completed");
    }

    #[tokio::test]
    async fn test_sinks_accept_events() {
        let event = AnalyticsEvent::QuizRejected {
            reason: "bad".to_string(),
        };
        TracingAnalytics.track(event.clone()).await;
        NoopAnalytics.track(event.clone()).await;

        let recorder = RecordingAnalytics::default();
        recorder.track(event.clone()).await;
        assert_eq!(recorder.events.lock().unwrap().as_slice(), &[event]);
    }
}
