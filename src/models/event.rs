//! Attendance event model and mark status vocabulary.
//!
//! An [`AttendanceEvent`] is the one entity this engine creates: exactly one
//! per employee per local calendar day, never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The recorded status of an attendance mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkStatus {
    /// The mark arrived at or before the on-time cutoff.
    OnTime,
    /// The mark arrived after the cutoff but within the window.
    Late,
}

impl std::fmt::Display for MarkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkStatus::OnTime => write!(f, "on_time"),
            MarkStatus::Late => write!(f, "late"),
        }
    }
}

/// A persisted attendance mark.
///
/// Created exactly once per employee per local calendar day by the engine's
/// successful classification path. The timestamp is stored as a UTC instant;
/// the local calendar date used for deduplication is derived from it in the
/// configured time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    /// Unique identifier for the event.
    pub id: Uuid,
    /// The employee the mark belongs to.
    pub employee_id: String,
    /// The instant the mark was recorded.
    pub timestamp: DateTime<Utc>,
    /// The classified status of the mark.
    pub status: MarkStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_mark_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&MarkStatus::OnTime).unwrap(),
            "\"on_time\""
        );
        assert_eq!(serde_json::to_string(&MarkStatus::Late).unwrap(), "\"late\"");
        let status: MarkStatus = serde_json::from_str("\"on_time\"").unwrap();
        assert_eq!(status, MarkStatus::OnTime);
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = AttendanceEvent {
            id: Uuid::new_v4(),
            employee_id: "19841201".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 3, 2, 1, 59, 0).unwrap(),
            status: MarkStatus::OnTime,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"status\":\"on_time\""));
        let deserialized: AttendanceEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_mark_status_display() {
        assert_eq!(MarkStatus::OnTime.to_string(), "on_time");
        assert_eq!(MarkStatus::Late.to_string(), "late");
    }
}
