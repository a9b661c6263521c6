//! In-memory reference implementation of the record store.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{AttendanceEvent, AttendanceSettings, Employee, Holiday, MarkStatus};
use crate::store::AttendanceStore;

#[derive(Debug, Default)]
struct Inner {
    employees: BTreeMap<String, Employee>,
    // Most recently saved settings record wins.
    settings: Vec<AttendanceSettings>,
    // Events keyed by employee, then by local calendar date. The per-date
    // key is the uniqueness constraint the duplicate guard relies on.
    events: HashMap<String, BTreeMap<NaiveDate, AttendanceEvent>>,
    holidays: Vec<Holiday>,
}

/// A mutex-guarded in-memory store.
///
/// One lock covers all records, which makes `insert_event` a true atomic
/// check-then-insert. Suitable for tests and single-process deployments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee record.
    pub fn add_employee(&self, employee: Employee) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.employees.insert(employee.id.clone(), employee);
    }

}

impl AttendanceStore for MemoryStore {
    fn find_employee(&self, id: &str) -> Option<Employee> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.employees.get(id).cloned()
    }

    fn list_employees(&self) -> Vec<Employee> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.employees.values().cloned().collect()
    }

    fn load_settings(&self) -> Option<AttendanceSettings> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.settings.last().cloned()
    }

    fn save_settings(&self, settings: AttendanceSettings) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.settings.push(settings);
    }

    fn find_event_for_date(
        &self,
        employee_id: &str,
        local_date: NaiveDate,
    ) -> Option<AttendanceEvent> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner
            .events
            .get(employee_id)
            .and_then(|by_date| by_date.get(&local_date))
            .cloned()
    }

    fn insert_event(
        &self,
        employee_id: &str,
        timestamp: DateTime<Utc>,
        local_date: NaiveDate,
        status: MarkStatus,
    ) -> Result<AttendanceEvent, AttendanceEvent> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let by_date = inner.events.entry(employee_id.to_string()).or_default();
        if let Some(existing) = by_date.get(&local_date) {
            return Err(existing.clone());
        }
        let event = AttendanceEvent {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            timestamp,
            status,
        };
        by_date.insert(local_date, event.clone());
        Ok(event)
    }

    fn list_events_for_month(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> Vec<AttendanceEvent> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner
            .events
            .get(employee_id)
            .map(|by_date| {
                by_date
                    .iter()
                    .filter(|(date, _)| date.year() == year && date.month() == month)
                    .map(|(_, event)| event.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn save_holiday(&self, holiday: Holiday) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.holidays.push(holiday);
    }

    fn list_holidays(&self, year: i32, month: u32) -> Vec<Holiday> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner
            .holidays
            .iter()
            .filter(|h| h.date.year() == year && h.date.month() == month)
            .cloned()
            .collect()
    }
}
