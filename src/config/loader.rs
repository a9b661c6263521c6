//! Configuration loading functionality.
//!
//! Reads the deployment YAML, converts it into validated domain types, and
//! surfaces every problem as an [`EngineError`] at load time.

use std::fs;
use std::path::Path;

use chrono::FixedOffset;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceSettings, Holiday};

use super::types::ConfigFile;

/// The validated deployment configuration.
///
/// Holds the configured zone offset, the bootstrap attendance settings
/// (already validated, work-day fallback applied), and the configured
/// holiday list.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The deployment's fixed zone offset.
    pub zone: FixedOffset,
    /// Validated bootstrap attendance settings.
    pub settings: AttendanceSettings,
    /// Configured holidays.
    pub holidays: Vec<Holiday>,
}

impl EngineConfig {
    /// Loads and validates configuration from the given YAML file.
    ///
    /// Returns an error if the file is missing ([`EngineError::ConfigNotFound`]),
    /// malformed ([`EngineError::ConfigParseError`]), or violates a settings
    /// invariant ([`EngineError::InvalidConfiguration`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: ConfigFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::from_file(file)
    }

    /// Converts a parsed configuration file into validated domain types.
    pub fn from_file(file: ConfigFile) -> EngineResult<Self> {
        let zone = parse_offset(&file.timezone)?;
        let work_days: Vec<&str> = file.settings.work_days.iter().map(String::as_str).collect();
        let settings = AttendanceSettings::parse(
            &file.settings.window_start,
            &file.settings.on_time_cutoff,
            &file.settings.window_end,
            &work_days,
        )?;
        let holidays = file
            .holidays
            .into_iter()
            .map(|h| Holiday {
                date: h.date,
                label: h.label,
            })
            .collect();

        Ok(Self {
            zone,
            settings,
            holidays,
        })
    }
}

/// Parses a `+HH:MM` / `-HH:MM` offset string into a [`FixedOffset`].
fn parse_offset(value: &str) -> EngineResult<FixedOffset> {
    let invalid = || EngineError::InvalidConfiguration {
        message: format!("'{}' is not a valid +HH:MM zone offset", value),
    };

    let (sign, rest) = if let Some(rest) = value.strip_prefix('+') {
        (1i32, rest)
    } else if let Some(rest) = value.strip_prefix('-') {
        (-1i32, rest)
    } else {
        return Err(invalid());
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let hours: i32 = hours.parse::<u8>().map_err(|_| invalid())?.into();
    let minutes: i32 = minutes.parse::<u8>().map_err(|_| invalid())?.into();
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
