//! Monday-Sunday week bucketing for the weekly booking limit
//!
//! The weekly limit counts a client's bookings whose activity *start*
//! falls inside the calendar week containing the target activity's start.
//! A week runs Monday 00:00:00 through Sunday 23:59:59 inclusive.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

/// Compute the `(monday_start, sunday_end)` bounds of the week containing
/// `instant`.
///
/// Both bounds are inclusive: `monday_start` is Monday 00:00:00 and
/// `sunday_end` is Sunday 23:59:59 of the same week.
pub fn week_bounds(instant: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    // ISO weekday: Monday = 1 .. Sunday = 7
    let weekday = i64::from(instant.weekday().number_from_monday());
    let monday_date = (instant - Duration::days(weekday - 1)).date_naive();

    let monday = monday_date.and_time(NaiveTime::MIN).and_utc();
    let sunday = (monday_date + Duration::days(6))
        .and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| monday_date.and_time(NaiveTime::MIN))
        .and_utc();

    (monday, sunday)
}
