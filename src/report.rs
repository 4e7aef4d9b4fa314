//! Report facade: validation and orchestration of the allocation pipeline.
//!
//! This is the engine's single entry point. It validates the request,
//! de-duplicates the ledger rows, allocates each one against the period
//! and aggregates the result into a [`PeriodReport`]. The whole
//! computation is synchronous and pure over data already materialized in
//! memory; collaborator I/O happens before this function is called, never
//! inside it.

use std::collections::HashMap;

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::allocation::{AllocatedRecord, aggregate, allocate_record, dedupe_records};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Diagnostic, DiagnosticCode, LaborWeek, PeriodReport, ReportingPeriod, WeeklyPayrollRecord,
};

/// The engine version stamped into every report.
const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a report request needs, materialized up front.
#[derive(Debug, Clone)]
pub struct ReportInput {
    /// The reporting period to project onto.
    pub period: ReportingPeriod,
    /// Labor week definitions, read-only from the work-week registry.
    pub weeks: Vec<LaborWeek>,
    /// Candidate payroll rows from the weekly ledger.
    pub records: Vec<WeeklyPayrollRecord>,
}

/// Generates a period report from weekly payroll records.
///
/// Validates the period and the week definitions, then runs the pipeline:
/// de-duplicate rows, intersect each row's week with the period, allocate
/// attendance proportionally, and aggregate per employee. "No intersecting
/// weeks found" is a valid empty result, not an error.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] when the period's start is after
/// its end, and [`EngineError::InvalidWeek`] when a week definition is
/// malformed. Per-record data-quality issues never fail the report; they
/// are returned in [`PeriodReport::diagnostics`].
///
/// # Example
///
/// ```
/// use payroll_engine::models::ReportingPeriod;
/// use payroll_engine::report::{ReportInput, generate_report};
/// use chrono::NaiveDate;
///
/// let input = ReportInput {
///     period: ReportingPeriod {
///         start_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
///     },
///     weeks: vec![],
///     records: vec![],
/// };
/// let report = generate_report(input).unwrap();
/// assert!(report.lines.is_empty());
/// ```
pub fn generate_report(input: ReportInput) -> EngineResult<PeriodReport> {
    if !input.period.is_well_formed() {
        return Err(EngineError::InvalidPeriod {
            start: input.period.start_date,
            end: input.period.end_date,
        });
    }
    for week in &input.weeks {
        if !week.is_well_formed() {
            return Err(EngineError::InvalidWeek {
                week_id: week.id.clone(),
                message: format!(
                    "end date {} is before start date {}",
                    week.end_date, week.start_date
                ),
            });
        }
    }

    let weeks_by_id: HashMap<&str, &LaborWeek> =
        input.weeks.iter().map(|w| (w.id.as_str(), w)).collect();

    let (records, mut diagnostics) = dedupe_records(input.records);

    let mut allocated = Vec::with_capacity(records.len());
    for record in records {
        let Some(week) = weeks_by_id.get(record.labor_week_id.as_str()) else {
            diagnostics.push(Diagnostic {
                code: DiagnosticCode::UnknownWeek,
                employee_id: Some(record.employee_id.clone()),
                labor_week_id: Some(record.labor_week_id.clone()),
                message: format!(
                    "record for employee '{}' references unknown labor week '{}'; skipped",
                    record.employee_id, record.labor_week_id
                ),
            });
            continue;
        };

        let outcome = allocate_record(&record, week, &input.period);
        if let Some(diagnostic) = outcome.diagnostic {
            diagnostics.push(diagnostic);
        }
        if let Some(contribution) = outcome.contribution {
            allocated.push(AllocatedRecord {
                record,
                contribution,
            });
        }
    }

    for diagnostic in &diagnostics {
        warn!(
            code = ?diagnostic.code,
            employee_id = diagnostic.employee_id.as_deref().unwrap_or("-"),
            labor_week_id = diagnostic.labor_week_id.as_deref().unwrap_or("-"),
            "{}", diagnostic.message
        );
    }

    let aggregation = aggregate(allocated);

    Ok(PeriodReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        period: input.period,
        lines: aggregation.lines,
        grand_total: aggregation.grand_total,
        diagnostics,
    })
}
