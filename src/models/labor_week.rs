//! Labor week model.
//!
//! This module defines the [`LaborWeek`] type representing a fixed,
//! non-overlapping pay week as stored by the work-week registry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fixed labor week as defined by the work-week registry.
///
/// Labor weeks start on a Monday and end on the following Saturday or
/// Sunday. They never overlap each other, and at most one is active at a
/// time system-wide; both invariants are enforced by the registry that
/// persists them, not by this engine, which consumes weeks read-only.
///
/// # Example
///
/// ```
/// use payroll_engine::models::LaborWeek;
/// use chrono::NaiveDate;
///
/// let week = LaborWeek {
///     id: "lw_032".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 8, 9).unwrap(),
///     is_active: true,
/// };
/// assert!(week.end_date >= week.start_date);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborWeek {
    /// Unique identifier for the labor week.
    pub id: String,
    /// The first day of the week (inclusive, a Monday).
    pub start_date: NaiveDate,
    /// The last day of the week (inclusive, a Saturday or Sunday).
    pub end_date: NaiveDate,
    /// Whether this is the currently open pay period.
    pub is_active: bool,
}

impl LaborWeek {
    /// Returns true if the week's dates are well-ordered.
    ///
    /// A week whose end date precedes its start date is malformed and is
    /// rejected at the report boundary before any allocation runs.
    pub fn is_well_formed(&self) -> bool {
        self.end_date >= self.start_date
    }
}
