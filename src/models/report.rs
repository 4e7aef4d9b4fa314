//! Report output models for the payroll reporting engine.
//!
//! This module contains the derived types produced by a report request:
//! per-week [`AllocatedContribution`]s, per-employee [`EmployeeReportLine`]s,
//! data-quality [`Diagnostic`]s, and the finished [`PeriodReport`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ReportingPeriod;

/// The share of one week's attendance attributable to a reporting period.
///
/// Produced per (employee, week) pair when that week intersects the
/// requested period. Day counts are whole units because attendance is
/// reported in whole and half days; fractional days are not meaningful to
/// the business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedContribution {
    /// The employee the contribution belongs to.
    pub employee_id: String,
    /// The labor week the contribution was allocated from.
    pub labor_week_id: String,
    /// Full days apportioned to the period (rounded half-up).
    pub allocated_full_days: u32,
    /// Half days apportioned to the period (rounded half-up).
    pub allocated_half_days: u32,
    /// Attendance pay repriced from the allocated day counts and the
    /// week's daily wage rate.
    pub allocated_attendance_pay: Decimal,
}

/// Identifies the kind of data-quality issue a [`Diagnostic`] reports.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DiagnosticCode;
///
/// let code = DiagnosticCode::DegenerateWeek;
/// assert_eq!(serde_json::to_string(&code).unwrap(), "\"degenerate_week\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// A labor week with zero working days; its record contributes nothing.
    DegenerateWeek,
    /// A record claiming attendance without a usable daily wage; its
    /// attendance contribution is zeroed.
    MissingWage,
    /// More than one record for the same (employee, week) pair; only the
    /// most recently updated one is counted.
    DuplicateRecord,
    /// A record referencing a labor week absent from the supplied
    /// definitions; the record is skipped.
    UnknownWeek,
}

/// A data-quality issue isolated during report generation.
///
/// Diagnostics replace the debug tracing the reporting path used to rely
/// on: every excluded or corrected row is accounted for in the report
/// itself instead of a process log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The kind of issue encountered.
    pub code: DiagnosticCode,
    /// The employee involved, when the issue is tied to a record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The labor week involved, when one could be identified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_week_id: Option<String>,
    /// Human-readable description of the issue.
    pub message: String,
}

/// One aggregated output row per employee appearing in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReportLine {
    /// Unique identifier of the employee.
    pub employee_id: String,
    /// The employee's name as recorded on the ledger rows.
    pub name: String,
    /// Total full days allocated to the period.
    pub total_full_days: u32,
    /// Total half days allocated to the period.
    pub total_half_days: u32,
    /// Attendance pay allocated to the period.
    pub total_attendance_pay: Decimal,
    /// Kiln-firing pay summed across intersecting weeks.
    pub total_kiln_firing_pay: Decimal,
    /// Extra-task pay summed across intersecting weeks.
    pub total_extra_task_pay: Decimal,
    /// Advances summed across intersecting weeks.
    pub total_advances: Decimal,
    /// Discounts summed across intersecting weeks.
    pub total_discounts: Decimal,
    /// Net total: attendance + kiln-firing + extra tasks - advances -
    /// discounts. May be negative when deductions exceed earnings.
    pub total_final: Decimal,
}

/// The complete result of a period report request.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PeriodReport, ReportingPeriod};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let report = PeriodReport {
///     report_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     period: ReportingPeriod {
///         start_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
///     },
///     lines: vec![],
///     grand_total: Decimal::ZERO,
///     diagnostics: vec![],
/// };
/// assert!(report.lines.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that generated the report.
    pub engine_version: String,
    /// The reporting period the figures cover.
    pub period: ReportingPeriod,
    /// One aggregated line per employee with a non-zero contribution,
    /// ordered by employee ID.
    pub lines: Vec<EmployeeReportLine>,
    /// Sum of all line totals, exact to the cent.
    pub grand_total: Decimal,
    /// Data-quality issues isolated during generation.
    pub diagnostics: Vec<Diagnostic>,
}
