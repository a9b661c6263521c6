//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod event;
mod report;
mod settings;

pub use employee::Employee;
pub use event::{AttendanceEvent, MarkStatus};
pub use report::{DayCell, DaySummary, MonthlyReport};
pub use settings::{AttendanceSettings, Holiday, WorkDay};
