//! Derived monthly report types.
//!
//! These types are computation results only: they are produced by the
//! monthly aggregator for presentation and statistics and are never
//! persisted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::MarkStatus;

/// The derived state of a single calendar day in the attendance matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCell {
    /// A recorded on-time mark.
    OnTime,
    /// A recorded late mark.
    Late,
    /// A past work day with no mark.
    Absent,
    /// A weekday outside the configured work-day set.
    WeeklyRest,
    /// A configured holiday.
    Holiday,
    /// A work day that is today or in the future, with no mark yet.
    Pending,
}

impl From<MarkStatus> for DayCell {
    fn from(status: MarkStatus) -> Self {
        match status {
            MarkStatus::OnTime => DayCell::OnTime,
            MarkStatus::Late => DayCell::Late,
        }
    }
}

/// Summary counters accumulated over one employee's month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Count of days marked on time.
    pub on_time: u32,
    /// Count of days marked late.
    pub late: u32,
    /// Count of past work days with no mark.
    pub absent: u32,
    /// Count of work-weekday dates in the month, marked or not.
    pub total_work_days: u32,
}

impl DaySummary {
    /// Combined present figure: on-time plus late marks.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::DaySummary;
    ///
    /// let summary = DaySummary { on_time: 18, late: 3, absent: 1, total_work_days: 26 };
    /// assert_eq!(summary.present(), 21);
    /// ```
    pub fn present(&self) -> u32 {
        self.on_time + self.late
    }
}

/// One employee's reconstructed attendance matrix for a calendar month.
///
/// `cells` holds an entry for every day of the month, including days with
/// no recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// The employee the report describes.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The report year.
    pub year: i32,
    /// The report month (1..=12).
    pub month: u32,
    /// Per-date cells covering the whole month, in date order.
    pub cells: BTreeMap<NaiveDate, DayCell>,
    /// Summary counters for the month.
    pub summary: DaySummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_cell_serde_names() {
        assert_eq!(
            serde_json::to_string(&DayCell::WeeklyRest).unwrap(),
            "\"weekly_rest\""
        );
        assert_eq!(
            serde_json::to_string(&DayCell::Pending).unwrap(),
            "\"pending\""
        );
    }

    #[test]
    fn test_day_cell_from_mark_status() {
        assert_eq!(DayCell::from(MarkStatus::OnTime), DayCell::OnTime);
        assert_eq!(DayCell::from(MarkStatus::Late), DayCell::Late);
    }

    #[test]
    fn test_summary_present_combines_on_time_and_late() {
        let summary = DaySummary {
            on_time: 10,
            late: 5,
            absent: 2,
            total_work_days: 20,
        };
        assert_eq!(summary.present(), 15);
    }

    #[test]
    fn test_report_serde_round_trip() {
        let mut cells = BTreeMap::new();
        cells.insert(
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            DayCell::OnTime,
        );
        let report = MonthlyReport {
            employee_id: "19841201".to_string(),
            employee_name: "Siti Rahma".to_string(),
            year: 2026,
            month: 3,
            cells,
            summary: DaySummary::default(),
        };
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: MonthlyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
