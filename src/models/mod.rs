//! Core data models for the payroll reporting engine.
//!
//! This module contains all the domain models used throughout the engine.

mod labor_week;
mod payroll_record;
mod report;
mod reporting_period;

pub use labor_week::LaborWeek;
pub use payroll_record::WeeklyPayrollRecord;
pub use report::{
    AllocatedContribution, Diagnostic, DiagnosticCode, EmployeeReportLine, PeriodReport,
};
pub use reporting_period::ReportingPeriod;
