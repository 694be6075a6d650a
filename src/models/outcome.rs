//! Allocation outcome models.
//!
//! This module contains the [`AllocationOutcome`] type and its per-employee
//! [`EmployeeOutcome`] lines, the read-only view handed to the report sink
//! once a distribution run completes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Employee;

/// The final computed values for one employee after a distribution run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeOutcome {
    /// Identifier for the employee.
    pub name: String,
    /// The salary coming into the run.
    pub current_salary: Decimal,
    /// The salary after all increases.
    pub new_salary: Decimal,
    /// Pre-run salary as a fraction of MRP.
    pub current_mrp_percent: Decimal,
    /// Post-run salary as a fraction of MRP.
    pub new_mrp_percent: Decimal,
    /// Fractional change between the old and new salary.
    pub salary_percent_delta: Decimal,
    /// Number of pool divisions the employee won.
    pub rounds_won: u32,
}

impl EmployeeOutcome {
    /// Captures the final state of an employee record.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            current_salary: employee.current_salary,
            new_salary: employee.new_salary,
            current_mrp_percent: employee.current_mrp_percent(),
            new_mrp_percent: employee.projected_mrp_percent(Decimal::ZERO),
            salary_percent_delta: employee.salary_percent_delta(),
            rounds_won: employee.rounds_won,
        }
    }
}

/// The complete result of a distribution run.
///
/// # Example
///
/// ```
/// use merit_engine::models::AllocationOutcome;
/// use rust_decimal::Decimal;
///
/// let outcome = AllocationOutcome::new(&[], Decimal::from(10_000), Decimal::from(10_000));
/// assert!(outcome.employees.is_empty());
/// assert_eq!(outcome.pool_remaining, Decimal::from(10_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// Unique identifier for this run.
    pub allocation_id: Uuid,
    /// When the run completed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The configured pool amount.
    pub pool: Decimal,
    /// The amount of the pool left unallocated.
    pub pool_remaining: Decimal,
    /// Final computed values per employee, in input order.
    pub employees: Vec<EmployeeOutcome>,
}

impl AllocationOutcome {
    /// Builds an outcome from the final employee states and pool figures.
    pub fn new(employees: &[Employee], pool: Decimal, pool_remaining: Decimal) -> Self {
        Self {
            allocation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            pool,
            pool_remaining,
            employees: employees.iter().map(EmployeeOutcome::from_employee).collect(),
        }
    }
}
