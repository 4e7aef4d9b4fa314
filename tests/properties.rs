//! Property-based tests for the allocation and aggregation invariants.
//!
//! These properties replace the ad-hoc debug tracing the reporting path
//! historically relied on to verify individual employees' numbers.

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::allocation::{allocate_record, count_working_days};
use payroll_engine::models::{LaborWeek, ReportingPeriod, WeeklyPayrollRecord};
use payroll_engine::report::{ReportInput, generate_report};

fn make_record(
    employee_id: String,
    week_id: String,
    full_days: u32,
    half_days: u32,
    wage_cents: i64,
    kiln_cents: i64,
    advance_cents: i64,
) -> WeeklyPayrollRecord {
    let daily_wage = Decimal::new(wage_cents, 2);
    let attendance_pay = Decimal::from(full_days) * daily_wage
        + Decimal::from(half_days) * daily_wage / Decimal::TWO;
    let kiln_firing_pay = Decimal::new(kiln_cents, 2);
    let advances = Decimal::new(advance_cents, 2);
    WeeklyPayrollRecord {
        employee_id,
        employee_name: "Test Employee".to_string(),
        labor_week_id: week_id,
        full_days,
        half_days,
        daily_wage,
        attendance_pay,
        kiln_firing_pay,
        extra_task_pay: Decimal::ZERO,
        advances,
        discounts: Decimal::ZERO,
        final_total: attendance_pay + kiln_firing_pay - advances,
        updated_at: "2025-08-09T18:00:00Z".parse().unwrap(),
    }
}

prop_compose! {
    /// An arbitrary calendar date between 2024 and 2026.
    fn arb_date()(year in 2024i32..=2026, month in 1u32..=12, day in 1u32..=28) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

prop_compose! {
    /// A well-formed labor week: Monday start, Saturday or Sunday end.
    fn arb_week()(date in arb_date(), ends_sunday in any::<bool>()) -> LaborWeek {
        let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        let length = if ends_sunday { 6 } else { 5 };
        LaborWeek {
            id: format!("lw_{}", monday),
            start_date: monday,
            end_date: monday + Duration::days(length),
            is_active: false,
        }
    }
}

proptest! {
    /// Working-day counts never shrink as the end date grows.
    #[test]
    fn working_days_monotonic_in_end_date(
        start in arb_date(),
        offset_a in 0i64..90,
        offset_b in 0i64..90,
    ) {
        let near = start + Duration::days(offset_a.min(offset_b));
        let far = start + Duration::days(offset_a.max(offset_b));
        prop_assert!(count_working_days(start, near) <= count_working_days(start, far));
    }

    /// An inclusive interval of n days holds between ceil(6n/7)-ish bounds:
    /// never more days than the calendar span, never negative.
    #[test]
    fn working_days_bounded_by_span(start in arb_date(), length in 0i64..120) {
        let end = start + Duration::days(length);
        let count = i64::from(count_working_days(start, end));
        prop_assert!(count <= length + 1);
    }

    /// A week fully inside the period reproduces its stored counts exactly.
    #[test]
    fn full_containment_is_idempotent(
        week in arb_week(),
        full_days in 0u32..=6,
        half_days in 0u32..=6,
        wage_cents in 100i64..100_000,
        slack_before in 0i64..20,
        slack_after in 0i64..20,
    ) {
        let record = make_record(
            "emp_001".to_string(),
            week.id.clone(),
            full_days,
            half_days,
            wage_cents,
            0,
            0,
        );
        let period = ReportingPeriod {
            start_date: week.start_date - Duration::days(slack_before),
            end_date: week.end_date + Duration::days(slack_after),
        };

        let outcome = allocate_record(&record, &week, &period);
        let contribution = outcome.contribution.unwrap();
        prop_assert_eq!(contribution.allocated_full_days, full_days);
        prop_assert_eq!(contribution.allocated_half_days, half_days);
        prop_assert_eq!(
            contribution.allocated_attendance_pay,
            record.attendance_pay
        );
    }

    /// A week entirely outside the period contributes nothing and raises
    /// no diagnostic.
    #[test]
    fn no_overlap_excludes_silently(
        week in arb_week(),
        full_days in 0u32..=6,
        gap in 1i64..60,
        length in 0i64..40,
        after in any::<bool>(),
    ) {
        let record = make_record(
            "emp_001".to_string(),
            week.id.clone(),
            full_days,
            0,
            5_000,
            0,
            0,
        );
        let period = if after {
            ReportingPeriod {
                start_date: week.end_date + Duration::days(gap),
                end_date: week.end_date + Duration::days(gap + length),
            }
        } else {
            ReportingPeriod {
                start_date: week.start_date - Duration::days(gap + length),
                end_date: week.start_date - Duration::days(gap),
            }
        };

        let outcome = allocate_record(&record, &week, &period);
        prop_assert!(outcome.contribution.is_none());
        prop_assert!(outcome.diagnostic.is_none());
    }

    /// Allocation never exceeds the stored day counts and never goes
    /// negative, for any overlap.
    #[test]
    fn allocation_is_bounded(
        week in arb_week(),
        full_days in 0u32..=6,
        half_days in 0u32..=6,
        wage_cents in 100i64..100_000,
        period_offset in -10i64..10,
        period_length in 0i64..40,
    ) {
        let record = make_record(
            "emp_001".to_string(),
            week.id.clone(),
            full_days,
            half_days,
            wage_cents,
            0,
            0,
        );
        let start = week.start_date + Duration::days(period_offset);
        let period = ReportingPeriod {
            start_date: start,
            end_date: start + Duration::days(period_length),
        };

        let outcome = allocate_record(&record, &week, &period);
        if let Some(contribution) = outcome.contribution {
            prop_assert!(contribution.allocated_full_days <= full_days);
            prop_assert!(contribution.allocated_half_days <= half_days);
            prop_assert!(contribution.allocated_attendance_pay >= Decimal::ZERO);
            prop_assert!(contribution.allocated_attendance_pay <= record.attendance_pay);
        }
    }

    /// The grand total always equals the sum of the emitted line totals,
    /// and every field except the final total is non-negative.
    #[test]
    fn report_is_additive_and_non_negative(
        base in arb_week(),
        records in proptest::collection::vec(
            (0usize..4, 0u32..=3, 0u32..=6, 0u32..=4, 100i64..20_000, 0i64..30_000, 0i64..30_000),
            0..12,
        ),
        period_offset in -14i64..28,
        period_length in 0i64..45,
    ) {
        // Four consecutive labor weeks starting from a common Monday.
        let weeks: Vec<LaborWeek> = (0..4)
            .map(|i| {
                let start = base.start_date + Duration::days(7 * i);
                LaborWeek {
                    id: format!("lw_{}", i),
                    start_date: start,
                    end_date: start + Duration::days(5),
                    is_active: false,
                }
            })
            .collect();

        let records: Vec<WeeklyPayrollRecord> = records
            .into_iter()
            .map(|(week_idx, emp, full, half, wage, kiln, advance)| {
                make_record(
                    format!("emp_{:03}", emp),
                    weeks[week_idx].id.clone(),
                    full,
                    half,
                    wage,
                    kiln,
                    advance,
                )
            })
            .collect();

        let start = base.start_date + Duration::days(period_offset);
        let input = ReportInput {
            period: ReportingPeriod {
                start_date: start,
                end_date: start + Duration::days(period_length),
            },
            weeks,
            records,
        };

        let report = generate_report(input).unwrap();
        let sum: Decimal = report.lines.iter().map(|l| l.total_final).sum();
        prop_assert_eq!(report.grand_total, sum);

        for line in &report.lines {
            prop_assert!(line.total_attendance_pay >= Decimal::ZERO);
            prop_assert!(line.total_kiln_firing_pay >= Decimal::ZERO);
            prop_assert!(line.total_extra_task_pay >= Decimal::ZERO);
            prop_assert!(line.total_advances >= Decimal::ZERO);
            prop_assert!(line.total_discounts >= Decimal::ZERO);
        }
    }
}
