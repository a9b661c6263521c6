//! Calendar and local-time helpers.
//!
//! All deduplication and backfill logic keys on the local calendar date in
//! the single configured zone, never on the UTC date; the deployment's
//! civil day and UTC day diverge by the zone offset.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Converts a UTC instant to the local wall-clock datetime of the
/// configured zone.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::local_datetime;
/// use chrono::{FixedOffset, TimeZone, Utc};
///
/// let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
/// let instant = Utc.with_ymd_and_hms(2026, 3, 1, 23, 30, 0).unwrap();
/// // 23:30 UTC is already 06:30 the next day at +07:00.
/// assert_eq!(local_datetime(instant, jakarta).to_string(), "2026-03-02 06:30:00");
/// ```
pub fn local_datetime(instant: DateTime<Utc>, zone: FixedOffset) -> NaiveDateTime {
    instant.with_timezone(&zone).naive_local()
}

/// Converts a UTC instant to the local calendar date of the configured zone.
pub fn local_date(instant: DateTime<Utc>, zone: FixedOffset) -> NaiveDate {
    local_datetime(instant, zone).date()
}

/// Returns the time of day as minutes since midnight.
///
/// Window comparisons use this uniformly; comparing `HH:MM` strings
/// lexicographically misorders times like "9:00" and "10:00".
pub fn minute_of_day(time: NaiveTime) -> u32 {
    use chrono::Timelike;
    time.hour() * 60 + time.minute()
}

/// Returns the number of days in the given month.
///
/// # Panics
///
/// Panics if `month` is outside 1..=12; callers validate the month before
/// any calendar arithmetic.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2026, 2), 28);
/// assert_eq!(days_in_month(2028, 2), 29);
/// assert_eq!(days_in_month(2026, 12), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| panic!("invalid year/month: {}-{}", year, month));
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    next_first.signed_duration_since(first).num_days() as u32
}

/// Returns every date of the given month in calendar order.
pub fn month_dates(year: i32, month: u32) -> impl Iterator<Item = NaiveDate> {
    (1..=days_in_month(year, month))
        .map(move |day| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}
