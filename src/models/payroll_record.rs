//! Weekly payroll record model.
//!
//! This module defines the [`WeeklyPayrollRecord`] type: one pre-aggregated
//! ledger row per (employee, labor week) pair.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the weekly payroll ledger.
///
/// The ledger guarantees
/// `attendance_pay == full_days * daily_wage + half_days * daily_wage / 2`
/// at write time. The engine trusts the stored monetary fields for the
/// non-prorated categories and only re-derives day counts when prorating
/// attendance across a reporting period.
///
/// Uniqueness of the (employee_id, labor_week_id) pair is relied upon to
/// prevent double counting; rows violating it are de-duplicated in favor
/// of the most recently updated one.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WeeklyPayrollRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record: WeeklyPayrollRecord = serde_json::from_str(r#"{
///     "employee_id": "emp_001",
///     "employee_name": "Ramona Quiroga",
///     "labor_week_id": "lw_032",
///     "full_days": 5,
///     "half_days": 1,
///     "daily_wage": "50.00",
///     "attendance_pay": "275.00",
///     "kiln_firing_pay": "80.00",
///     "extra_task_pay": "0",
///     "advances": "100.00",
///     "discounts": "0",
///     "final_total": "255.00",
///     "updated_at": "2025-08-09T18:30:00Z"
/// }"#).unwrap();
/// assert_eq!(record.daily_wage, Decimal::from_str("50.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPayrollRecord {
    /// Unique identifier of the employee this row belongs to.
    pub employee_id: String,
    /// Denormalized employee name snapshot taken at ledger-write time.
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
    /// Kiln-firing shift pay for the week (per-shift events, never prorated).
    pub kiln_firing_pay: Decimal,
    /// Extra-task pay for the week (discrete events, never prorated).
    pub extra_task_pay: Decimal,
    /// Advances handed out during the week.
    pub advances: Decimal,
    /// Discounts applied during the week.
    pub discounts: Decimal,
    /// The week's stored final total.
    pub final_total: Decimal,
    /// When this row was last written. Used only to resolve duplicate rows
    /// deterministically; never consulted by the allocation arithmetic.
    pub updated_at: DateTime<Utc>,
}

impl WeeklyPayrollRecord {
    /// Returns true if the record claims attendance but carries no usable
    /// wage rate to price it with.
    pub fn has_missing_wage(&self) -> bool {
        (self.full_days > 0 || self.half_days > 0) && self.daily_wage <= Decimal::ZERO
    }
}
