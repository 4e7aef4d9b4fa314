//! Working-day counting.
//!
//! This module is the unit of truth for labor-day arithmetic, reused by
//! every other component. Working days are Monday through Saturday; Sunday
//! is the fixed rest day. The rule is a business constant of the factory,
//! not a runtime-configurable parameter.

use chrono::{Datelike, NaiveDate, Weekday};

/// The weekday a labor week starts on.
pub const WEEK_START: Weekday = Weekday::Mon;

/// The single weekly rest day, excluded from working-day counts.
pub const REST_DAY: Weekday = Weekday::Sun;

/// Returns true if the given date is a working day.
///
/// # Example
///
/// ```
/// use payroll_engine::allocation::is_working_day;
/// use chrono::NaiveDate;
///
/// // 2025-08-09 is a Saturday, 2025-08-10 a Sunday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2025, 8, 9).unwrap()));
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()));
/// ```
pub fn is_working_day(date: NaiveDate) -> bool {
    date.weekday() != REST_DAY
}

/// Counts the working days in an inclusive calendar-date interval.
///
/// A day counts if its weekday is Monday through Saturday. If
/// `start > end` the interval is empty and the count is 0, never negative.
/// Pure and total; all comparisons happen on calendar-local dates so a
/// week boundary can never drift across a timezone offset.
///
/// # Example
///
/// ```
/// use payroll_engine::allocation::count_working_days;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2025, 8, 9).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
///
/// assert_eq!(count_working_days(monday, saturday), 6);
/// assert_eq!(count_working_days(monday, sunday), 6); // Sunday excluded
/// assert_eq!(count_working_days(saturday, monday), 0); // empty interval
/// ```
pub fn count_working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }

    // Any seven consecutive days contain exactly one rest day, so full
    // weeks contribute six working days each and only the remainder needs
    // to be walked.
    let total_days = (end - start).num_days() as u32 + 1;
    let full_weeks = total_days / 7;
    let mut count = full_weeks * 6;

    let mut current = start + chrono::Duration::days(i64::from(full_weeks) * 7);
    while current <= end {
        if is_working_day(current) {
            count += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    count
}
