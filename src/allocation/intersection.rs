//! Interval intersection between labor weeks and reporting periods.
//!
//! All comparisons are made on calendar-local dates. The reporting path
//! never re-derives a date from a timezone-bearing timestamp, which is how
//! week boundaries stay on the calendar day they were stored as.

use chrono::NaiveDate;

/// Computes the overlap between a labor week and a reporting period.
///
/// Returns the inclusive sub-interval
/// `[max(week_start, period_start), min(week_end, period_end)]` when it is
/// non-empty, or `None` when the intervals do not overlap. No overlap is
/// not an error; a week entirely outside the period is simply skipped.
///
/// # Example
///
/// ```
/// use payroll_engine::allocation::intersect;
/// use chrono::NaiveDate;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
///
/// // Week straddling the start of August 2025.
/// assert_eq!(
///     intersect(d("2025-07-28"), d("2025-08-02"), d("2025-08-01"), d("2025-08-31")),
///     Some((d("2025-08-01"), d("2025-08-02")))
/// );
///
/// // Week entirely before the period.
/// assert_eq!(
///     intersect(d("2025-07-21"), d("2025-07-26"), d("2025-08-01"), d("2025-08-31")),
///     None
/// );
/// ```
pub fn intersect(
    week_start: NaiveDate,
    week_end: NaiveDate,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    let start = week_start.max(period_start);
    let end = week_end.min(period_end);
    if start <= end { Some((start, end)) } else { None }
}
