//! Report rendering for completed distribution runs.
//!
//! The report sink is read-only: it consumes an [`AllocationOutcome`]
//! and renders the per-employee before/after summary, either as plain
//! text lines or as pretty-printed JSON.

use std::io;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AllocationOutcome, EmployeeOutcome};

/// Rounds a value to three decimal places for display, dropping
/// trailing zeros.
fn display(value: Decimal) -> Decimal {
    value.round_dp(3).normalize()
}

/// Formats one employee's summary line.
fn employee_line(outcome: &EmployeeOutcome) -> String {
    let percent = display(outcome.salary_percent_delta * Decimal::from(100));
    let direction = if outcome.salary_percent_delta >= Decimal::ZERO {
        "increase"
    } else {
        "decrease"
    };

    format!(
        "{}: ${} -> ${}, {} MRP -> {} MRP, a {}% {} after {} rounds",
        outcome.name,
        display(outcome.current_salary),
        display(outcome.new_salary),
        display(outcome.current_mrp_percent),
        display(outcome.new_mrp_percent),
        percent,
        direction,
        outcome.rounds_won
    )
}

/// Renders the text report for a completed run.
///
/// One line per employee in input order, followed by the leftover pool
/// amount when there is one; a zero (or negative) leftover is omitted.
///
/// # Example
///
/// ```
/// use merit_engine::models::AllocationOutcome;
/// use merit_engine::report::render_report;
/// use rust_decimal::Decimal;
///
/// let outcome = AllocationOutcome::new(&[], Decimal::from(10_000), Decimal::from(250));
/// assert_eq!(render_report(&outcome), "Pool Remaining: $250\n");
/// ```
pub fn render_report(outcome: &AllocationOutcome) -> String {
    let mut lines: Vec<String> = outcome.employees.iter().map(employee_line).collect();

    if outcome.pool_remaining > Decimal::ZERO {
        lines.push(format!("Pool Remaining: ${}", display(outcome.pool_remaining)));
    }

    let mut report = lines.join("\n");
    if !report.is_empty() {
        report.push('\n');
    }
    report
}

/// Writes the text report to the given writer.
pub fn write_report<W: io::Write>(writer: &mut W, outcome: &AllocationOutcome) -> io::Result<()> {
    writer.write_all(render_report(outcome).as_bytes())
}

/// Renders the outcome as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`EngineError::ReportError`] if serialization fails.
pub fn render_json(outcome: &AllocationOutcome) -> EngineResult<String> {
    serde_json::to_string_pretty(outcome).map_err(|e| EngineError::ReportError {
        message: e.to_string(),
    })
}
