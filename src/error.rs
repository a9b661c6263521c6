//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all conditions that can reject an attendance mark or a report
//! request. Every variant carries enough context for a precise user-facing
//! message (the relevant configured boundary, or the existing mark's time).

use chrono::{NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::models::WorkDay;

/// The main error type for the Attendance Engine.
///
/// All operations in the engine return this error type. Every condition is
/// recoverable by the caller; none is process-fatal.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
/// use chrono::NaiveTime;
///
/// let error = EngineError::TooEarly {
///     opens_at: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
/// };
/// assert_eq!(error.to_string(), "Attendance is not open yet; marking opens at 07:00");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The current weekday is not configured as a work day.
    #[error("{weekday} is not a configured work day")]
    NotAWorkDay {
        /// The weekday of the rejected mark.
        weekday: WorkDay,
    },

    /// The mark arrived before the attendance window opens.
    #[error("Attendance is not open yet; marking opens at {opens_at}", opens_at = .opens_at.format("%H:%M"))]
    TooEarly {
        /// The configured start of the attendance window.
        opens_at: NaiveTime,
    },

    /// The mark arrived after the attendance window closed.
    #[error("The attendance window closed at {closed_at}", closed_at = .closed_at.format("%H:%M"))]
    TooLate {
        /// The configured end of the attendance window.
        closed_at: NaiveTime,
    },

    /// An attendance event already exists for this employee today.
    #[error("Attendance was already marked today at {recorded_at}", recorded_at = .recorded_at.format("%H:%M"))]
    AlreadyMarked {
        /// Local time of the existing event.
        recorded_at: NaiveDateTime,
    },

    /// No attendance settings have been stored.
    #[error("Attendance settings have not been configured")]
    SettingsMissing,

    /// The employee id did not resolve to a known employee.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// The identification collaborator did not recognize the sample.
    #[error("The captured sample was not recognized")]
    NotRecognized,

    /// Stored or loaded configuration violates an invariant.
    #[error("Invalid attendance configuration: {message}")]
    InvalidConfiguration {
        /// A description of the violated invariant.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_not_a_work_day_displays_weekday() {
        let error = EngineError::NotAWorkDay {
            weekday: WorkDay::Sunday,
        };
        assert_eq!(error.to_string(), "sunday is not a configured work day");
    }

    #[test]
    fn test_too_early_displays_window_start() {
        let error = EngineError::TooEarly {
            opens_at: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Attendance is not open yet; marking opens at 07:00"
        );
    }

    #[test]
    fn test_too_late_displays_window_end() {
        let error = EngineError::TooLate {
            closed_at: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        };
        assert_eq!(error.to_string(), "The attendance window closed at 14:00");
    }

    #[test]
    fn test_already_marked_displays_existing_time() {
        let recorded_at = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(8, 59, 0)
            .unwrap();
        let error = EngineError::AlreadyMarked { recorded_at };
        assert_eq!(
            error.to_string(),
            "Attendance was already marked today at 08:59"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "19841201".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: 19841201");
    }

    #[test]
    fn test_invalid_configuration_displays_message() {
        let error = EngineError::InvalidConfiguration {
            message: "window_start 14:00 is after window_end 07:00".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid attendance configuration: window_start 14:00 is after window_end 07:00"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_settings_missing() -> EngineResult<()> {
            Err(EngineError::SettingsMissing)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_settings_missing()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
