//! Proportional allocation of weekly attendance to a reporting period.
//!
//! For each payroll record whose labor week intersects the requested
//! period, the allocator converts the week's absolute day counts into
//! counts attributable to the period, using the ratio of working days in
//! the intersection to working days in the whole week. Day counts are
//! rounded half-up and attendance pay is repriced from the wage rate
//! afterwards, so rounding happens once instead of accumulating.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    AllocatedContribution, Diagnostic, DiagnosticCode, LaborWeek, ReportingPeriod,
    WeeklyPayrollRecord,
};

use super::intersection::intersect;
use super::working_days::count_working_days;

/// The outcome of allocating one payroll record against a period.
///
/// `contribution` is `None` when the record contributes nothing to the
/// report: its week misses the period entirely, or the week is degenerate.
/// A record with a missing wage still yields a (zeroed) contribution so
/// its non-prorated monetary fields keep aggregating.
#[derive(Debug, Clone)]
pub struct AllocationOutcome {
    /// The period-attributable share of the record, if any.
    pub contribution: Option<AllocatedContribution>,
    /// A data-quality diagnostic raised while allocating, if any.
    pub diagnostic: Option<Diagnostic>,
}

/// Allocates one record's attendance to the reporting period.
///
/// Behavior:
/// - Week outside the period: contributes nothing, no diagnostic. A week
///   with zero attendance still participates; it simply allocates zeros.
/// - Week with zero working days: contributes nothing, flagged
///   [`DiagnosticCode::DegenerateWeek`] (never a division by zero).
/// - Record claiming attendance without a usable wage: attendance
///   contribution zeroed, flagged [`DiagnosticCode::MissingWage`].
/// - Week fully contained in the period: the stored day counts are
///   reproduced exactly.
///
/// The caller guarantees well-ordered week and period dates; malformed
/// intervals are rejected at the report boundary before allocation runs.
///
/// # Example
///
/// ```
/// use payroll_engine::allocation::allocate_record;
/// use payroll_engine::models::{LaborWeek, ReportingPeriod, WeeklyPayrollRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let week = LaborWeek {
///     id: "lw_032".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 8, 9).unwrap(),
///     is_active: false,
/// };
/// let record = WeeklyPayrollRecord {
///     employee_id: "emp_001".to_string(),
///     employee_name: "Ramona Quiroga".to_string(),
///     labor_week_id: "lw_032".to_string(),
///     full_days: 5,
///     half_days: 0,
///     daily_wage: Decimal::from(50),
///     attendance_pay: Decimal::from(250),
///     kiln_firing_pay: Decimal::ZERO,
///     extra_task_pay: Decimal::ZERO,
///     advances: Decimal::ZERO,
///     discounts: Decimal::ZERO,
///     final_total: Decimal::from(250),
///     updated_at: "2025-08-09T18:00:00Z".parse().unwrap(),
/// };
/// // Period covering only Monday and Tuesday of the week: 2 of 6 working days.
/// let period = ReportingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
/// };
///
/// let outcome = allocate_record(&record, &week, &period);
/// let contribution = outcome.contribution.unwrap();
/// assert_eq!(contribution.allocated_full_days, 2); // round(5 * 2/6)
/// assert_eq!(contribution.allocated_attendance_pay, Decimal::from(100));
/// ```
pub fn allocate_record(
    record: &WeeklyPayrollRecord,
    week: &LaborWeek,
    period: &ReportingPeriod,
) -> AllocationOutcome {
    let Some((overlap_start, overlap_end)) = intersect(
        week.start_date,
        week.end_date,
        period.start_date,
        period.end_date,
    ) else {
        return AllocationOutcome {
            contribution: None,
            diagnostic: None,
        };
    };

    let total_working_days = count_working_days(week.start_date, week.end_date);
    if total_working_days == 0 {
        return AllocationOutcome {
            contribution: None,
            diagnostic: Some(Diagnostic {
                code: DiagnosticCode::DegenerateWeek,
                employee_id: Some(record.employee_id.clone()),
                labor_week_id: Some(week.id.clone()),
                message: format!(
                    "labor week '{}' ({}..{}) has zero working days; record excluded",
                    week.id, week.start_date, week.end_date
                ),
            }),
        };
    }

    if record.has_missing_wage() {
        return AllocationOutcome {
            contribution: Some(zero_contribution(record)),
            diagnostic: Some(Diagnostic {
                code: DiagnosticCode::MissingWage,
                employee_id: Some(record.employee_id.clone()),
                labor_week_id: Some(week.id.clone()),
                message: format!(
                    "record for employee '{}' in week '{}' has attendance but no daily wage; \
                     attendance contribution zeroed",
                    record.employee_id, week.id
                ),
            }),
        };
    }

    let overlap_working_days = count_working_days(overlap_start, overlap_end);

    // Full containment must reproduce the stored counts exactly.
    let (allocated_full_days, allocated_half_days) = if overlap_working_days == total_working_days {
        (record.full_days, record.half_days)
    } else {
        let proportion = Decimal::from(overlap_working_days) / Decimal::from(total_working_days);
        (
            round_half_up(Decimal::from(record.full_days) * proportion),
            round_half_up(Decimal::from(record.half_days) * proportion),
        )
    };

    // Reprice from the wage rate rather than prorating the stored pay:
    // rounding the day counts first keeps a single rounding step.
    let allocated_attendance_pay = Decimal::from(allocated_full_days) * record.daily_wage
        + Decimal::from(allocated_half_days) * record.daily_wage / Decimal::TWO;

    AllocationOutcome {
        contribution: Some(AllocatedContribution {
            employee_id: record.employee_id.clone(),
            labor_week_id: week.id.clone(),
            allocated_full_days,
            allocated_half_days,
            allocated_attendance_pay,
        }),
        diagnostic: None,
    }
}

fn zero_contribution(record: &WeeklyPayrollRecord) -> AllocatedContribution {
    AllocatedContribution {
        employee_id: record.employee_id.clone(),
        labor_week_id: record.labor_week_id.clone(),
        allocated_full_days: 0,
        allocated_half_days: 0,
        allocated_attendance_pay: Decimal::ZERO,
    }
}

/// Rounds a non-negative day count to the nearest whole day, half-up.
fn round_half_up(value: Decimal) -> u32 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}
