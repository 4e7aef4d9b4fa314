//! Reporting period model.
//!
//! This module defines the [`ReportingPeriod`] type describing the
//! arbitrary calendar range a report is requested for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An arbitrary, possibly week-misaligned calendar-date interval.
///
/// Typically the first and last day of a month. Both endpoints are
/// inclusive, and both are calendar-local dates; the engine never works
/// with timestamps, so a week boundary stored as midnight UTC can never
/// shift to the wrong calendar day.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ReportingPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// The start date of the reporting period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the reporting period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportingPeriod {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the period's dates are well-ordered.
    pub fn is_well_formed(&self) -> bool {
        self.end_date >= self.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn august() -> ReportingPeriod {
        ReportingPeriod {
            start_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
        }
    }

    /// RP-001: contains_date within period
    #[test]
    fn test_contains_date_within_period() {
        let period = august();
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()));
    }

    /// RP-002: contains_date on both endpoints
    #[test]
    fn test_contains_date_on_endpoints() {
        let period = august();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    /// RP-003: contains_date outside period
    #[test]
    fn test_contains_date_outside_period() {
        let period = august();
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 7, 31).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()));
    }

    /// RP-004: single-day period is well-formed
    #[test]
    fn test_single_day_period_is_well_formed() {
        let day = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let period = ReportingPeriod {
            start_date: day,
            end_date: day,
        };
        assert!(period.is_well_formed());
        assert!(period.contains_date(day));
    }

    /// RP-005: reversed period is malformed
    #[test]
    fn test_reversed_period_is_malformed() {
        let period = ReportingPeriod {
            start_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        };
        assert!(!period.is_well_formed());
    }

    #[test]
    fn test_serialize_reporting_period() {
        let json = serde_json::to_string(&august()).unwrap();
        assert!(json.contains("\"start_date\":\"2025-08-01\""));
        assert!(json.contains("\"end_date\":\"2025-08-31\""));
    }

    #[test]
    fn test_deserialize_reporting_period() {
        let json = r#"{ "start_date": "2025-08-01", "end_date": "2025-08-31" }"#;
        let period: ReportingPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period, august());
    }
}
