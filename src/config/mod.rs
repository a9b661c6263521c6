//! Deployment configuration for the Attendance Engine.
//!
//! This module loads the engine's deployment configuration from a YAML
//! file: the configured time zone offset, the bootstrap attendance
//! settings, and any configured holidays. Validation happens eagerly at
//! load time; classification never discovers a bad window mid-request.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load("./config/attendance.yaml").unwrap();
//! println!("Zone offset: {}", config.zone);
//! ```

mod loader;
mod types;

pub use loader::EngineConfig;
pub use types::{ConfigFile, HolidayEntry, SettingsEntry};
