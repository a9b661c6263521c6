//! Attendance settings, work-day vocabulary, and configured holidays.
//!
//! This module defines the [`AttendanceSettings`] singleton that governs the
//! attendance window, the [`WorkDay`] enum used for the configured work-day
//! set, and the [`Holiday`] record for administratively configured non-work
//! dates.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::calculation::minute_of_day;
use crate::error::{EngineError, EngineResult};

/// A day of the week as configured in the work-day set.
///
/// Serialized as lowercase full names (`"monday"`, ..., `"sunday"`), the
/// form the administrative configuration stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkDay {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl WorkDay {
    /// All seven weekdays, Monday first.
    pub const ALL: [WorkDay; 7] = [
        WorkDay::Monday,
        WorkDay::Tuesday,
        WorkDay::Wednesday,
        WorkDay::Thursday,
        WorkDay::Friday,
        WorkDay::Saturday,
        WorkDay::Sunday,
    ];

    /// Parses a lowercase weekday name as stored by the configuration.
    pub fn from_name(name: &str) -> EngineResult<Self> {
        match name {
            "monday" => Ok(WorkDay::Monday),
            "tuesday" => Ok(WorkDay::Tuesday),
            "wednesday" => Ok(WorkDay::Wednesday),
            "thursday" => Ok(WorkDay::Thursday),
            "friday" => Ok(WorkDay::Friday),
            "saturday" => Ok(WorkDay::Saturday),
            "sunday" => Ok(WorkDay::Sunday),
            other => Err(EngineError::InvalidConfiguration {
                message: format!("'{}' is not a weekday name", other),
            }),
        }
    }
}

impl From<Weekday> for WorkDay {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => WorkDay::Monday,
            Weekday::Tue => WorkDay::Tuesday,
            Weekday::Wed => WorkDay::Wednesday,
            Weekday::Thu => WorkDay::Thursday,
            Weekday::Fri => WorkDay::Friday,
            Weekday::Sat => WorkDay::Saturday,
            Weekday::Sun => WorkDay::Sunday,
        }
    }
}

impl std::fmt::Display for WorkDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WorkDay::Monday => "monday",
            WorkDay::Tuesday => "tuesday",
            WorkDay::Wednesday => "wednesday",
            WorkDay::Thursday => "thursday",
            WorkDay::Friday => "friday",
            WorkDay::Saturday => "saturday",
            WorkDay::Sunday => "sunday",
        };
        write!(f, "{}", name)
    }
}

/// The attendance window configuration.
///
/// A single settings record governs all marking: the time-of-day window in
/// which marks are accepted, the cutoff separating on-time from late, and
/// the set of weekdays eligible for attendance. Created and updated by an
/// administrative action; read-only to the engine's classification path.
///
/// Invariant: `window_start <= on_time_cutoff <= window_end`, compared at
/// minute granularity. [`AttendanceSettings::validated`] enforces it and
/// applies the documented fallback for an empty work-day set.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceSettings;
///
/// let settings = AttendanceSettings::parse(
///     "07:00",
///     "09:00",
///     "14:00",
///     &["monday", "tuesday", "wednesday", "thursday", "friday", "saturday"],
/// ).unwrap();
/// assert_eq!(settings.work_days.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSettings {
    /// Time of day at which attendance opens.
    pub window_start: NaiveTime,
    /// Time of day after which a mark is "late" rather than "on time".
    pub on_time_cutoff: NaiveTime,
    /// Time of day after which no mark is accepted.
    pub window_end: NaiveTime,
    /// Weekdays eligible for attendance.
    #[serde(default)]
    pub work_days: BTreeSet<WorkDay>,
}

impl AttendanceSettings {
    /// Parses settings from `HH:MM` strings and lowercase weekday names.
    ///
    /// Convenience for configuration and test code; the result is already
    /// validated.
    pub fn parse(
        window_start: &str,
        on_time_cutoff: &str,
        window_end: &str,
        work_days: &[&str],
    ) -> EngineResult<Self> {
        let parse_time = |s: &str| {
            NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| EngineError::InvalidConfiguration {
                message: format!("'{}' is not a valid HH:MM time", s),
            })
        };
        let days = work_days
            .iter()
            .map(|name| WorkDay::from_name(name))
            .collect::<EngineResult<BTreeSet<WorkDay>>>()?;

        AttendanceSettings {
            window_start: parse_time(window_start)?,
            on_time_cutoff: parse_time(on_time_cutoff)?,
            window_end: parse_time(window_end)?,
            work_days: days,
        }
        .validated()
    }

    /// Validates the window ordering and normalizes the work-day set.
    ///
    /// Returns `InvalidConfiguration` when the three window times are out of
    /// order. An empty work-day set is not an error: it falls back to all
    /// seven days (fail open), so downstream code always sees a non-empty
    /// set.
    pub fn validated(mut self) -> EngineResult<Self> {
        if minute_of_day(self.window_start) > minute_of_day(self.on_time_cutoff) {
            return Err(EngineError::InvalidConfiguration {
                message: format!(
                    "window_start {} is after on_time_cutoff {}",
                    self.window_start.format("%H:%M"),
                    self.on_time_cutoff.format("%H:%M"),
                ),
            });
        }
        if minute_of_day(self.on_time_cutoff) > minute_of_day(self.window_end) {
            return Err(EngineError::InvalidConfiguration {
                message: format!(
                    "on_time_cutoff {} is after window_end {}",
                    self.on_time_cutoff.format("%H:%M"),
                    self.window_end.format("%H:%M"),
                ),
            });
        }
        if self.work_days.is_empty() {
            self.work_days = WorkDay::ALL.into_iter().collect();
        }
        Ok(self)
    }

    /// Returns true if the given weekday is configured as a work day.
    pub fn is_work_day(&self, weekday: WorkDay) -> bool {
        self.work_days.contains(&weekday)
    }
}

/// A configured non-work date (e.g., a public holiday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The local calendar date of the holiday.
    pub date: NaiveDate,
    /// A short label for the holiday (e.g., "Independence Day").
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_settings() -> AttendanceSettings {
        AttendanceSettings::parse("07:00", "09:00", "14:00", &["monday", "saturday"]).unwrap()
    }

    #[test]
    fn test_parse_accepts_valid_settings() {
        let settings = base_settings();
        assert_eq!(settings.window_start, NaiveTime::from_hms_opt(7, 0, 0).unwrap());
        assert_eq!(settings.on_time_cutoff, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(settings.window_end, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert!(settings.is_work_day(WorkDay::Monday));
        assert!(!settings.is_work_day(WorkDay::Sunday));
    }

    #[test]
    fn test_validated_rejects_start_after_cutoff() {
        let result = AttendanceSettings::parse("10:00", "09:00", "14:00", &["monday"]);
        match result {
            Err(EngineError::InvalidConfiguration { message }) => {
                assert!(message.contains("10:00"));
                assert!(message.contains("09:00"));
            }
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_validated_rejects_cutoff_after_end() {
        let result = AttendanceSettings::parse("07:00", "15:00", "14:00", &["monday"]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_empty_work_days_falls_back_to_all_seven() {
        let settings = AttendanceSettings::parse("07:00", "09:00", "14:00", &[]).unwrap();
        assert_eq!(settings.work_days.len(), 7);
        assert!(settings.is_work_day(WorkDay::Sunday));
    }

    #[test]
    fn test_parse_rejects_unknown_weekday_name() {
        let result = AttendanceSettings::parse("07:00", "09:00", "14:00", &["funday"]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_time() {
        let result = AttendanceSettings::parse("7 o'clock", "09:00", "14:00", &["monday"]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_equal_boundaries_are_valid() {
        // A zero-width window is degenerate but ordered, so it is accepted.
        let settings = AttendanceSettings::parse("09:00", "09:00", "09:00", &["monday"]);
        assert!(settings.is_ok());
    }

    #[test]
    fn test_work_day_serde_names() {
        assert_eq!(
            serde_json::to_string(&WorkDay::Monday).unwrap(),
            "\"monday\""
        );
        let day: WorkDay = serde_json::from_str("\"saturday\"").unwrap();
        assert_eq!(day, WorkDay::Saturday);
    }

    #[test]
    fn test_work_day_from_chrono_weekday() {
        assert_eq!(WorkDay::from(Weekday::Mon), WorkDay::Monday);
        assert_eq!(WorkDay::from(Weekday::Sun), WorkDay::Sunday);
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = base_settings();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: AttendanceSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
