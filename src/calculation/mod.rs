//! Calculation logic for the Attendance Engine.
//!
//! This module contains the pure functions at the core of the engine:
//! calendar helpers (local-time derivation, minute-of-day comparison,
//! month geometry), the attendance window classifier, and the monthly
//! aggregator that reconstructs a full calendar matrix from stored events.

mod calendar;
mod monthly;
mod window;

pub use calendar::{days_in_month, local_date, local_datetime, minute_of_day, month_dates};
pub use monthly::build_monthly_report;
pub use window::classify;
