//! Per-employee aggregation of allocated contributions.
//!
//! Sums allocated attendance and the non-prorated monetary categories
//! across all intersecting weeks, producing one report line per employee
//! plus the grand total. Kiln-firing pay, extra-task pay, advances and
//! discounts are discrete dated events the ledger pre-aggregates per week,
//! so an intersecting week contributes its stored amounts unscaled.

use std::collections::BTreeMap;
use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    AllocatedContribution, Diagnostic, DiagnosticCode, EmployeeReportLine, WeeklyPayrollRecord,
};

/// Monetary output precision: two-decimal fixed point, half-up.
const MONEY_DP: u32 = 2;

/// A payroll record paired with its period-attributable contribution.
#[derive(Debug, Clone)]
pub struct AllocatedRecord {
    /// The deduplicated ledger row.
    pub record: WeeklyPayrollRecord,
    /// The attendance share allocated to the reporting period.
    pub contribution: AllocatedContribution,
}

/// The aggregated output of a report: per-employee lines and grand total.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    /// One line per employee with a non-zero contribution, ordered by
    /// employee ID.
    pub lines: Vec<EmployeeReportLine>,
    /// Sum of all line totals, exact to the cent.
    pub grand_total: Decimal,
}

/// De-duplicates ledger rows by their (employee, week) composite key.
///
/// A given pair must be folded into the aggregate at most once per report,
/// even if the underlying query returned it more than once. Extras are
/// resolved deterministically in favor of the most recently updated row
/// (ties keep the row seen last) and flagged with
/// [`DiagnosticCode::DuplicateRecord`].
pub fn dedupe_records(
    records: Vec<WeeklyPayrollRecord>,
) -> (Vec<WeeklyPayrollRecord>, Vec<Diagnostic>) {
    let mut kept: Vec<WeeklyPayrollRecord> = Vec::with_capacity(records.len());
    let mut index_by_key: HashMap<(String, String), usize> = HashMap::new();
    let mut diagnostics = Vec::new();

    for record in records {
        let key = (record.employee_id.clone(), record.labor_week_id.clone());
        match index_by_key.get(&key) {
            None => {
                index_by_key.insert(key, kept.len());
                kept.push(record);
            }
            Some(&existing) => {
                diagnostics.push(Diagnostic {
                    code: DiagnosticCode::DuplicateRecord,
                    employee_id: Some(record.employee_id.clone()),
                    labor_week_id: Some(record.labor_week_id.clone()),
                    message: format!(
                        "duplicate record for employee '{}' in week '{}'; \
                         keeping the most recently updated",
                        record.employee_id, record.labor_week_id
                    ),
                });
                if record.updated_at >= kept[existing].updated_at {
                    kept[existing] = record;
                }
            }
        }
    }

    (kept, diagnostics)
}

/// Aggregates allocated records into per-employee report lines.
///
/// Summation rules:
/// - attendance pay is the sum of allocated (prorated) attendance;
/// - kiln-firing pay, extra-task pay, advances and discounts are straight
///   sums of the stored weekly fields;
/// - `total_final = attendance + kiln + extra - advances - discounts`.
///
/// Employees with no attendance, no kiln-firing pay and no extra-task pay
/// in the period are omitted. Monetary totals are emitted with two-decimal
/// fixed-point precision, and the grand total is the exact sum of the
/// emitted line totals.
pub fn aggregate(entries: Vec<AllocatedRecord>) -> AggregationResult {
    #[derive(Default)]
    struct Accumulator {
        name: String,
        full_days: u32,
        half_days: u32,
        attendance: Decimal,
        kiln_firing: Decimal,
        extra_task: Decimal,
        advances: Decimal,
        discounts: Decimal,
    }

    // BTreeMap keys the fold by employee and yields deterministic line order.
    let mut per_employee: BTreeMap<String, Accumulator> = BTreeMap::new();

    for entry in entries {
        let accumulator = per_employee
            .entry(entry.record.employee_id.clone())
            .or_default();
        if accumulator.name.is_empty() {
            accumulator.name = entry.record.employee_name.clone();
        }
        accumulator.full_days += entry.contribution.allocated_full_days;
        accumulator.half_days += entry.contribution.allocated_half_days;
        accumulator.attendance += entry.contribution.allocated_attendance_pay;
        accumulator.kiln_firing += entry.record.kiln_firing_pay;
        accumulator.extra_task += entry.record.extra_task_pay;
        accumulator.advances += entry.record.advances;
        accumulator.discounts += entry.record.discounts;
    }

    let mut lines = Vec::with_capacity(per_employee.len());
    let mut grand_total = Decimal::ZERO;
    grand_total.rescale(MONEY_DP);

    for (employee_id, accumulator) in per_employee {
        let has_earnings = accumulator.full_days > 0
            || accumulator.half_days > 0
            || !accumulator.attendance.is_zero()
            || !accumulator.kiln_firing.is_zero()
            || !accumulator.extra_task.is_zero();
        if !has_earnings {
            continue;
        }

        let total_attendance_pay = round_money(accumulator.attendance);
        let total_kiln_firing_pay = round_money(accumulator.kiln_firing);
        let total_extra_task_pay = round_money(accumulator.extra_task);
        let total_advances = round_money(accumulator.advances);
        let total_discounts = round_money(accumulator.discounts);
        // Derived from the already-rounded components so the line identity
        // and the grand total both hold exactly to the cent.
        let total_final = total_attendance_pay + total_kiln_firing_pay + total_extra_task_pay
            - total_advances
            - total_discounts;
        grand_total += total_final;

        lines.push(EmployeeReportLine {
            employee_id,
            name: accumulator.name,
            total_full_days: accumulator.full_days,
            total_half_days: accumulator.half_days,
            total_attendance_pay,
            total_kiln_firing_pay,
            total_extra_task_pay,
            total_advances,
            total_discounts,
            total_final,
        });
    }

    AggregationResult { lines, grand_total }
}

/// Rounds to the two-decimal output precision and pins the scale so the
/// serialized form always carries cents ("250.00", not "250").
fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DP);
    rounded
}
