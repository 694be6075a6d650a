//! Allocation logic for the merit distribution engine.
//!
//! A distribution run has two phases. Phase one resolves each employee's
//! performance weight and increase bounds and applies the mandatory
//! minimum raises, charging them against the pool. Phase two hands the
//! remaining pool out one division at a time to the employee with the
//! best knapsack ratio, skipping anyone a division would push over their
//! pay-band ceiling, until the pool runs dry or no eligible winner
//! remains.

mod bounds;
mod knapsack;

pub use bounds::{apply_minimum_raise, apply_minimum_raises, resolve_bounds};
pub use knapsack::{distribute_pool, select_winner};

use rust_decimal::Decimal;
use tracing::info;

use crate::config::AllocatorOptions;
use crate::error::EngineResult;
use crate::models::Employee;

/// Runs a complete distribution over the employees, mutating them in
/// place, and returns the leftover pool.
///
/// Deterministic: the same employees and options always produce the same
/// final salaries and round counts.
///
/// # Errors
///
/// Fails before any discretionary distribution if a rating has no
/// translation entry ([`crate::error::EngineError::RatingNotFound`]) or
/// the pool cannot cover the mandatory minimum raises
/// ([`crate::error::EngineError::InsufficientPool`]).
///
/// # Example
///
/// ```
/// use merit_engine::allocation::allocate;
/// use merit_engine::config::AllocatorOptions;
/// use merit_engine::models::{Employee, EmployeeRecord};
/// use rust_decimal::Decimal;
///
/// let record = EmployeeRecord::new("Avery", Decimal::from(50_000), Decimal::from(50_000));
/// let mut employees = vec![Employee::from_record(record).unwrap()];
///
/// let leftover = allocate(&mut employees, &AllocatorOptions::default()).unwrap();
/// assert!(employees[0].new_salary > employees[0].current_salary);
/// assert!(leftover >= Decimal::ZERO);
/// ```
pub fn allocate(
    employees: &mut [Employee],
    options: &AllocatorOptions,
) -> EngineResult<Decimal> {
    info!(
        pool = %options.pool,
        divisions = %options.divisions,
        employees = employees.len(),
        "starting distribution run"
    );

    let pool_remaining = apply_minimum_raises(employees, options)?;
    let leftover = distribute_pool(employees, pool_remaining, options.divisions);

    info!(leftover = %leftover, "distribution run complete");
    Ok(leftover)
}
