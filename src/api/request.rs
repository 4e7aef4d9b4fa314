//! Request types for the payroll reporting API.
//!
//! This module defines the JSON request structures for the
//! `/reports/period` endpoint. Dates travel as ISO-8601 calendar dates
//! (`YYYY-MM-DD`) with no time component, which sidesteps timezone
//! ambiguity at the boundary.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LaborWeek, ReportingPeriod, WeeklyPayrollRecord};
use crate::report::ReportInput;

/// Request body for the `/reports/period` endpoint.
///
/// Contains the reporting period plus the labor weeks and ledger rows the
/// collaborators materialized for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The first day of the reporting period (inclusive).
    pub period_start: NaiveDate,
    /// The last day of the reporting period (inclusive).
    pub period_end: NaiveDate,
    /// Labor week definitions from the work-week registry.
    pub weeks: Vec<LaborWeekRequest>,
    /// Candidate payroll rows from the weekly ledger.
    pub records: Vec<PayrollRecordRequest>,
}

/// Labor week definition in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborWeekRequest {
    /// Unique identifier for the labor week.
    pub id: String,
    /// The first day of the week (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the week (inclusive).
    pub end_date: NaiveDate,
    /// Whether this is the currently open pay period.
    #[serde(default)]
    pub is_active: bool,
}

/// Weekly payroll ledger row in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRecordRequest {
    /// Unique identifier of the employee.
    pub employee_id: String,
    /// The employee's name as recorded on the ledger row.
    pub employee_name: String,
    /// The labor week this row aggregates.
    pub labor_week_id: String,
    /// Number of full attendance days recorded in the week.
    pub full_days: u32,
    /// Number of half attendance days recorded in the week.
    pub half_days: u32,
    /// The daily wage rate used to price attendance for this week.
    pub daily_wage: Decimal,
    /// Stored attendance pay for the whole week.
    pub attendance_pay: Decimal,
    /// Kiln-firing shift pay for the week.
    #[serde(default)]
    pub kiln_firing_pay: Decimal,
    /// Extra-task pay for the week.
    #[serde(default)]
    pub extra_task_pay: Decimal,
    /// Advances handed out during the week.
    #[serde(default)]
    pub advances: Decimal,
    /// Discounts applied during the week.
    #[serde(default)]
    pub discounts: Decimal,
    /// The week's stored final total.
    #[serde(default)]
    pub final_total: Decimal,
    /// When this row was last written.
    #[serde(default = "default_updated_at")]
    pub updated_at: DateTime<Utc>,
}

fn default_updated_at() -> DateTime<Utc> {
    Utc::now()
}

impl From<LaborWeekRequest> for LaborWeek {
    fn from(req: LaborWeekRequest) -> Self {
        LaborWeek {
            id: req.id,
            start_date: req.start_date,
            end_date: req.end_date,
            is_active: req.is_active,
        }
    }
}

impl From<PayrollRecordRequest> for WeeklyPayrollRecord {
    fn from(req: PayrollRecordRequest) -> Self {
        WeeklyPayrollRecord {
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            labor_week_id: req.labor_week_id,
            full_days: req.full_days,
            half_days: req.half_days,
            daily_wage: req.daily_wage,
            attendance_pay: req.attendance_pay,
            kiln_firing_pay: req.kiln_firing_pay,
            extra_task_pay: req.extra_task_pay,
            advances: req.advances,
            discounts: req.discounts,
            final_total: req.final_total,
            updated_at: req.updated_at,
        }
    }
}

impl From<ReportRequest> for ReportInput {
    fn from(req: ReportRequest) -> Self {
        ReportInput {
            period: ReportingPeriod {
                start_date: req.period_start,
                end_date: req.period_end,
            },
            weeks: req.weeks.into_iter().map(Into::into).collect(),
            records: req.records.into_iter().map(Into::into).collect(),
        }
    }
}
