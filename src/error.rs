//! Error types for the payroll reporting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the structural input errors that abort report generation. Per-record
//! data-quality issues are not errors; they are reported as
//! [`Diagnostic`](crate::models::Diagnostic) entries alongside the report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll reporting engine.
///
/// Only structural input errors abort a report; everything else degrades
/// to a diagnostic so one bad row cannot blank out an entire report.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidPeriod {
///     start: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid reporting period: start 2025-08-31 is after end 2025-08-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The reporting period's start date is after its end date.
    #[error("Invalid reporting period: start {start} is after end {end}")]
    InvalidPeriod {
        /// The requested period start date.
        start: NaiveDate,
        /// The requested period end date.
        end: NaiveDate,
    },

    /// A labor week definition was malformed (end date before start date).
    #[error("Invalid labor week '{week_id}': {message}")]
    InvalidWeek {
        /// The ID of the malformed labor week.
        week_id: String,
        /// A description of what made the week invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
