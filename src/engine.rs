//! Attendance engine orchestration.
//!
//! Ties the pure calculation functions to the record store: the write path
//! (duplicate guard, window classification, atomic insert) and the
//! read-only monthly report path. Each call is one independent unit of
//! work; the only shared state is the store behind its own lock.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculation::{build_monthly_report, classify, local_date, local_datetime};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceSettings, MarkStatus, MonthlyReport};
use crate::store::AttendanceStore;

/// The identification collaborator.
///
/// Maps a captured biometric sample to an employee id. The engine treats it
/// as opaque; recognition itself is out of scope.
pub trait IdentitySource: Send + Sync {
    /// Resolves a sample to an employee id, or `None` when not recognized.
    fn identify(&self, sample: &[u8]) -> Option<String>;
}

/// The outcome of a successful attendance mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkReceipt {
    /// The employee the mark was recorded for.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The classified status of the mark.
    pub status: MarkStatus,
    /// Local wall-clock time the mark was recorded.
    pub recorded_at: NaiveDateTime,
}

/// The attendance engine.
///
/// Holds the store handle and the configured zone offset. Cheap to clone;
/// shared by all request handlers.
#[derive(Clone)]
pub struct AttendanceEngine {
    store: Arc<dyn AttendanceStore>,
    zone: FixedOffset,
}

impl AttendanceEngine {
    /// Creates an engine over the given store and zone offset.
    pub fn new(store: Arc<dyn AttendanceStore>, zone: FixedOffset) -> Self {
        Self { store, zone }
    }

    /// Creates an engine from deployment configuration, seeding the store
    /// with the bootstrap settings and configured holidays.
    pub fn from_config(store: Arc<dyn AttendanceStore>, config: EngineConfig) -> Self {
        store.save_settings(config.settings);
        for holiday in config.holidays {
            store.save_holiday(holiday);
        }
        Self::new(store, config.zone)
    }

    /// The configured zone offset.
    pub fn zone(&self) -> FixedOffset {
        self.zone
    }

    /// The store handle.
    pub fn store(&self) -> &Arc<dyn AttendanceStore> {
        &self.store
    }

    /// Records an attendance mark for an already-identified employee.
    ///
    /// Path: load and validate settings, resolve the employee, duplicate
    /// guard for the local calendar day, window classification, atomic
    /// insert. A rejection at any step leaves no partial event behind.
    pub fn record_attendance(
        &self,
        employee_id: &str,
        now: DateTime<Utc>,
    ) -> EngineResult<MarkReceipt> {
        let settings = self.settings()?;
        let employee =
            self.store
                .find_employee(employee_id)
                .ok_or_else(|| EngineError::EmployeeNotFound {
                    id: employee_id.to_string(),
                })?;

        let now_local = local_datetime(now, self.zone);
        let today_local = now_local.date();

        // Duplicate guard: at most one event per employee per local day.
        if let Some(existing) = self.store.find_event_for_date(&employee.id, today_local) {
            return Err(EngineError::AlreadyMarked {
                recorded_at: local_datetime(existing.timestamp, self.zone),
            });
        }

        let status = classify(now_local, &settings)?;

        // The store re-checks under its lock; losing a race to a
        // near-simultaneous mark surfaces as AlreadyMarked, not a failure.
        let event = self
            .store
            .insert_event(&employee.id, now, today_local, status)
            .map_err(|existing| EngineError::AlreadyMarked {
                recorded_at: local_datetime(existing.timestamp, self.zone),
            })?;

        info!(
            employee_id = %employee.id,
            status = %status,
            recorded_at = %event.timestamp,
            "Attendance recorded"
        );

        Ok(MarkReceipt {
            employee_id: employee.id,
            employee_name: employee.name,
            status,
            recorded_at: local_datetime(event.timestamp, self.zone),
        })
    }

    /// Identifies a captured sample and records attendance for the match.
    pub fn record_from_sample(
        &self,
        identity: &dyn IdentitySource,
        sample: &[u8],
        now: DateTime<Utc>,
    ) -> EngineResult<MarkReceipt> {
        let employee_id = identity.identify(sample).ok_or(EngineError::NotRecognized)?;
        debug!(employee_id = %employee_id, "Sample identified");
        self.record_attendance(&employee_id, now)
    }

    /// Builds monthly reports for the given employees.
    ///
    /// Read-only and idempotent. `today` is the local calendar date the
    /// report is relative to; see [`Self::today`].
    pub fn monthly_reports(
        &self,
        employee_ids: &[String],
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> EngineResult<Vec<MonthlyReport>> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidConfiguration {
                message: format!("month {} is out of range 1..=12", month),
            });
        }
        // chrono cannot represent dates outside roughly year ±262142; the
        // month geometry helpers panic past that.
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(EngineError::InvalidConfiguration {
                message: format!("year {} is outside the supported calendar range", year),
            });
        }
        let settings = self.settings()?;
        let holidays = self.store.list_holidays(year, month);

        let mut reports = Vec::with_capacity(employee_ids.len());
        for id in employee_ids {
            let employee =
                self.store
                    .find_employee(id)
                    .ok_or_else(|| EngineError::EmployeeNotFound {
                        id: id.to_string(),
                    })?;
            let events = self.store.list_events_for_month(id, year, month);
            reports.push(build_monthly_report(
                &employee, &events, &holidays, &settings, year, month, today, self.zone,
            ));
        }
        Ok(reports)
    }

    /// Builds monthly reports for every stored employee.
    pub fn monthly_reports_all(
        &self,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> EngineResult<Vec<MonthlyReport>> {
        let ids: Vec<String> = self
            .store
            .list_employees()
            .into_iter()
            .map(|e| e.id)
            .collect();
        self.monthly_reports(&ids, year, month, today)
    }

    /// The current local calendar date in the configured zone.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        local_date(now, self.zone)
    }

    /// Loads and validates the stored settings.
    fn settings(&self) -> EngineResult<AttendanceSettings> {
        self.store
            .load_settings()
            .ok_or(EngineError::SettingsMissing)?
            .validated()
    }
}
