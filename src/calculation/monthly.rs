//! Monthly attendance aggregation.
//!
//! Reconstructs a complete day-by-day attendance matrix for one employee
//! and one calendar month, backfilling rest days, configured holidays, and
//! unmarked past work days, and accumulating summary counters in a single
//! per-day fold.

use std::collections::BTreeMap;

use chrono::{Datelike, FixedOffset, NaiveDate};

use crate::calculation::{local_date, month_dates};
use crate::models::{
    AttendanceEvent, AttendanceSettings, DayCell, DaySummary, Employee, Holiday, MonthlyReport,
    WorkDay,
};

/// Builds the attendance matrix for one employee and month.
///
/// Pure function of its inputs; calling it twice with identical arguments
/// yields identical output. `today` is the local calendar date the report
/// is built on; work days at or after it are left pending rather than
/// backfilled as absent.
///
/// Per-day rules, in order:
///
/// 1. A recorded event's status is the cell verbatim. If storage ever holds
///    duplicates for one date, only the earliest event counts.
/// 2. A configured holiday renders as [`DayCell::Holiday`].
/// 3. A weekday outside the work-day set renders as [`DayCell::WeeklyRest`].
/// 4. A past work day with no event renders as [`DayCell::Absent`].
/// 5. A work day that is today or later stays [`DayCell::Pending`].
///
/// `total_work_days` counts every non-holiday date whose weekday is in the
/// work-day set, marked or not; rest days and holidays never contribute.
pub fn build_monthly_report(
    employee: &Employee,
    events: &[AttendanceEvent],
    holidays: &[Holiday],
    settings: &AttendanceSettings,
    year: i32,
    month: u32,
    today: NaiveDate,
    zone: FixedOffset,
) -> MonthlyReport {
    // Earliest event per local calendar date; later duplicates are ignored.
    let mut first_event_by_date: BTreeMap<NaiveDate, &AttendanceEvent> = BTreeMap::new();
    for event in events {
        let date = local_date(event.timestamp, zone);
        first_event_by_date
            .entry(date)
            .and_modify(|existing| {
                if event.timestamp < existing.timestamp {
                    *existing = event;
                }
            })
            .or_insert(event);
    }

    let holiday_dates: std::collections::BTreeSet<NaiveDate> =
        holidays.iter().map(|h| h.date).collect();

    let (cells, summary) = month_dates(year, month).fold(
        (BTreeMap::new(), DaySummary::default()),
        |(mut cells, mut summary), date| {
            let weekday = WorkDay::from(date.weekday());
            let is_work_day = settings.is_work_day(weekday);
            let is_holiday = holiday_dates.contains(&date);

            let cell = if let Some(event) = first_event_by_date.get(&date) {
                DayCell::from(event.status)
            } else if is_holiday {
                DayCell::Holiday
            } else if !is_work_day {
                DayCell::WeeklyRest
            } else if date < today {
                DayCell::Absent
            } else {
                DayCell::Pending
            };

            match cell {
                DayCell::OnTime => summary.on_time += 1,
                DayCell::Late => summary.late += 1,
                DayCell::Absent => summary.absent += 1,
                DayCell::WeeklyRest | DayCell::Holiday | DayCell::Pending => {}
            }
            if is_work_day && !is_holiday {
                summary.total_work_days += 1;
            }

            cells.insert(date, cell);
            (cells, summary)
        },
    );

    MonthlyReport {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        year,
        month,
        cells,
        summary,
    }
}
