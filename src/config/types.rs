//! Raw configuration-file structures.
//!
//! These types mirror the YAML file as written by an operator: times are
//! `HH:MM` strings and weekdays lowercase names. They are converted into
//! validated domain types by the loader.

use chrono::NaiveDate;
use serde::Deserialize;

/// The root of the deployment configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// The deployment's fixed zone offset (e.g., "+07:00").
    pub timezone: String,
    /// Bootstrap attendance settings.
    pub settings: SettingsEntry,
    /// Configured holidays.
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

/// Attendance settings as written in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsEntry {
    /// Time of day attendance opens, as `HH:MM`.
    pub window_start: String,
    /// On-time cutoff, as `HH:MM`.
    pub on_time_cutoff: String,
    /// Time of day the window closes, as `HH:MM`.
    pub window_end: String,
    /// Lowercase weekday names eligible for attendance.
    #[serde(default)]
    pub work_days: Vec<String>,
}

/// A configured holiday entry.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The holiday date.
    pub date: NaiveDate,
    /// A short label for the holiday.
    pub label: String,
}
