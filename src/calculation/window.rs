//! Attendance window classification.
//!
//! Given a local wall-clock instant and the attendance settings, decides
//! whether a check-in is allowed, and if so, whether it is on time or late.
//! Pure function; the duplicate guard runs before this and persistence
//! after it, so classification itself never touches storage.

use chrono::{Datelike, NaiveDateTime};

use crate::calculation::minute_of_day;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceSettings, MarkStatus, WorkDay};

/// Classifies a mark attempt against the attendance window.
///
/// `now_local` is the wall-clock datetime in the configured zone. The
/// decision is made at minute granularity:
///
/// 1. A weekday outside the configured work-day set fails with
///    [`EngineError::NotAWorkDay`].
/// 2. A time before `window_start` fails with [`EngineError::TooEarly`];
///    after `window_end`, with [`EngineError::TooLate`].
/// 3. Otherwise the mark is [`MarkStatus::OnTime`] up to and including
///    `on_time_cutoff`, and [`MarkStatus::Late`] after it.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::classify;
/// use attendance_engine::models::{AttendanceSettings, MarkStatus};
/// use chrono::NaiveDateTime;
///
/// let settings = AttendanceSettings::parse(
///     "07:00", "09:00", "14:00",
///     &["monday", "tuesday", "wednesday", "thursday", "friday", "saturday"],
/// ).unwrap();
///
/// // 2026-03-02 is a Monday.
/// let now = NaiveDateTime::parse_from_str("2026-03-02 08:59:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(classify(now, &settings).unwrap(), MarkStatus::OnTime);
///
/// let now = NaiveDateTime::parse_from_str("2026-03-02 09:01:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(classify(now, &settings).unwrap(), MarkStatus::Late);
/// ```
pub fn classify(now_local: NaiveDateTime, settings: &AttendanceSettings) -> EngineResult<MarkStatus> {
    let weekday = WorkDay::from(now_local.weekday());
    if !settings.is_work_day(weekday) {
        return Err(EngineError::NotAWorkDay { weekday });
    }

    let t = minute_of_day(now_local.time());
    if t < minute_of_day(settings.window_start) {
        return Err(EngineError::TooEarly {
            opens_at: settings.window_start,
        });
    }
    if t > minute_of_day(settings.window_end) {
        return Err(EngineError::TooLate {
            closed_at: settings.window_end,
        });
    }

    if t <= minute_of_day(settings.on_time_cutoff) {
        Ok(MarkStatus::OnTime)
    } else {
        Ok(MarkStatus::Late)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use proptest::prelude::*;

    fn settings() -> AttendanceSettings {
        AttendanceSettings::parse(
            "07:00",
            "09:00",
            "14:00",
            &["monday", "tuesday", "wednesday", "thursday", "friday", "saturday"],
        )
        .unwrap()
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    // 2026-03-02 is a Monday, 2026-03-08 a Sunday.

    #[test]
    fn test_before_cutoff_is_on_time() {
        assert_eq!(
            classify(at("2026-03-02", "08:59:00"), &settings()).unwrap(),
            MarkStatus::OnTime
        );
    }

    #[test]
    fn test_exactly_at_cutoff_is_on_time() {
        assert_eq!(
            classify(at("2026-03-02", "09:00:00"), &settings()).unwrap(),
            MarkStatus::OnTime
        );
    }

    #[test]
    fn test_after_cutoff_is_late() {
        assert_eq!(
            classify(at("2026-03-02", "09:01:00"), &settings()).unwrap(),
            MarkStatus::Late
        );
    }

    #[test]
    fn test_at_window_end_is_late_but_accepted() {
        assert_eq!(
            classify(at("2026-03-02", "14:00:00"), &settings()).unwrap(),
            MarkStatus::Late
        );
    }

    #[test]
    fn test_at_window_start_is_on_time() {
        assert_eq!(
            classify(at("2026-03-02", "07:00:00"), &settings()).unwrap(),
            MarkStatus::OnTime
        );
    }

    #[test]
    fn test_before_window_start_is_too_early() {
        let err = classify(at("2026-03-02", "06:59:00"), &settings()).unwrap_err();
        match err {
            EngineError::TooEarly { opens_at } => {
                assert_eq!(opens_at, NaiveTime::from_hms_opt(7, 0, 0).unwrap());
            }
            other => panic!("expected TooEarly, got {:?}", other),
        }
    }

    #[test]
    fn test_after_window_end_is_too_late() {
        let err = classify(at("2026-03-02", "14:01:00"), &settings()).unwrap_err();
        match err {
            EngineError::TooLate { closed_at } => {
                assert_eq!(closed_at, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
            }
            other => panic!("expected TooLate, got {:?}", other),
        }
    }

    #[test]
    fn test_sunday_is_not_a_work_day() {
        let err = classify(at("2026-03-08", "08:00:00"), &settings()).unwrap_err();
        match err {
            EngineError::NotAWorkDay { weekday } => assert_eq!(weekday, WorkDay::Sunday),
            other => panic!("expected NotAWorkDay, got {:?}", other),
        }
    }

    #[test]
    fn test_saturday_is_a_work_day_here() {
        // 2026-03-07 is a Saturday and the settings include it.
        assert!(classify(at("2026-03-07", "08:00:00"), &settings()).is_ok());
    }

    #[test]
    fn test_seconds_within_the_cutoff_minute_stay_on_time() {
        // 09:00:59 is still minute 540, the cutoff minute.
        assert_eq!(
            classify(at("2026-03-02", "09:00:59"), &settings()).unwrap(),
            MarkStatus::OnTime
        );
    }

    proptest! {
        /// Any ordered window classifies every in-window minute of a work
        /// day as OnTime or Late, split exactly at the cutoff.
        #[test]
        fn prop_window_classification_is_total_and_split_at_cutoff(
            start in 0u32..1440,
            cutoff_offset in 0u32..1440,
            end_offset in 0u32..1440,
            t in 0u32..1440,
        ) {
            let cutoff = (start + cutoff_offset).min(1439);
            let end = (cutoff + end_offset).min(1439);
            let time = |m: u32| NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap();

            let settings = AttendanceSettings {
                window_start: time(start),
                on_time_cutoff: time(cutoff),
                window_end: time(end),
                work_days: WorkDay::ALL.into_iter().collect(),
            }
            .validated()
            .unwrap();

            // Every weekday is a work day, so only the window decides.
            let now = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_time(time(t));
            match classify(now, &settings) {
                Ok(MarkStatus::OnTime) => prop_assert!(t >= start && t <= cutoff),
                Ok(MarkStatus::Late) => prop_assert!(t > cutoff && t <= end),
                Err(EngineError::TooEarly { .. }) => prop_assert!(t < start),
                Err(EngineError::TooLate { .. }) => prop_assert!(t > end),
                Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
            }
        }
    }
}
