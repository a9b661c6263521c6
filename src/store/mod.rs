//! Record-store contract and reference implementation.
//!
//! The engine consumes durable storage through the [`AttendanceStore`]
//! trait; the surrounding application decides what actually backs it. The
//! crate ships [`MemoryStore`], a mutex-guarded in-memory implementation
//! used by the tests and by deployments that bootstrap from configuration.

mod memory;

pub use memory::MemoryStore;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{AttendanceEvent, AttendanceSettings, Employee, Holiday, MarkStatus};

/// The storage contract the engine requires.
///
/// Events are keyed by (employee, local calendar date). `insert_event` must
/// be an atomic check-then-insert: when two near-simultaneous marks race
/// for the same employee and date, exactly one wins and the loser receives
/// the winning event back. Implementations backed by a database should map
/// a uniqueness-constraint violation on (employee_id, local_date) to the
/// same outcome.
pub trait AttendanceStore: Send + Sync {
    /// Looks up an employee by its business code.
    fn find_employee(&self, id: &str) -> Option<Employee>;

    /// Lists all employees, ordered by id.
    fn list_employees(&self) -> Vec<Employee>;

    /// Loads the current attendance settings, if any have been stored.
    ///
    /// When duplicates exist, the most recently saved record wins.
    fn load_settings(&self) -> Option<AttendanceSettings>;

    /// Stores new attendance settings, superseding any previous record.
    fn save_settings(&self, settings: AttendanceSettings);

    /// Finds the event recorded for an employee on a local calendar date.
    fn find_event_for_date(&self, employee_id: &str, local_date: NaiveDate)
    -> Option<AttendanceEvent>;

    /// Atomically inserts an event for (employee, local date).
    ///
    /// Returns `Err` with the already-stored event when one exists; the
    /// caller maps that to an `AlreadyMarked` rejection. Nothing is written
    /// on conflict.
    fn insert_event(
        &self,
        employee_id: &str,
        timestamp: DateTime<Utc>,
        local_date: NaiveDate,
        status: MarkStatus,
    ) -> Result<AttendanceEvent, AttendanceEvent>;

    /// Lists an employee's events whose local date falls in the given month.
    fn list_events_for_month(&self, employee_id: &str, year: i32, month: u32)
    -> Vec<AttendanceEvent>;

    /// Stores a configured holiday.
    fn save_holiday(&self, holiday: Holiday);

    /// Lists configured holidays falling in the given month.
    fn list_holidays(&self, year: i32, month: u32) -> Vec<Holiday>;
}
