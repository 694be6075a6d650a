//! Bound resolution and minimum guaranteed raises.
//!
//! This module implements the first phase of a distribution run: a single
//! pass over the employees, in input order, that resolves each employee's
//! performance weight and increase bounds, applies the minimum raise, and
//! charges the consumed divisions against the pool.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, info};

use crate::config::AllocatorOptions;
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Resolves an employee's performance weight and increase bounds.
///
/// The performance weight always comes from the configuration's rating
/// translation table. When the minimum increase is still unset, it is
/// derived as the smallest of the configured floor, the employee's own
/// ceiling, and zero for zero-weight employees not entitled to the floor.
/// The derived minimum never goes below zero: increases are monotonic,
/// so a ceiling that sits below zero (an employee already above the band
/// top) caps the minimum at zero instead of turning it into a cut.
///
/// A zero performance weight collapses the employee's ceiling down to
/// the resolved minimum, which leaves no headroom for discretionary
/// divisions.
///
/// # Errors
///
/// Returns [`EngineError::RatingNotFound`] if the employee's rating has
/// no entry in the translation table.
pub fn resolve_bounds(employee: &mut Employee, options: &AllocatorOptions) -> EngineResult<()> {
    let weight = options
        .weight_for_rating(employee.rating)
        .ok_or(EngineError::RatingNotFound {
            rating: employee.rating,
        })?;
    employee.perf_weight = weight;

    if employee.min_increase_percent.is_none() {
        let mut resolved = options.min_salary_increase.min(employee.max_increase_percent);
        if weight.is_zero() && !options.bad_performer_gets_min {
            resolved = resolved.min(Decimal::ZERO);
        }
        employee.min_increase_percent = Some(resolved.max(Decimal::ZERO));
    }

    if weight.is_zero() {
        if let Some(min) = employee.min_increase_percent {
            employee.max_increase_percent = min;
        }
    }

    Ok(())
}

/// Applies an employee's minimum raise and converts it into divisions.
///
/// The raise bumps the running salary by the resolved minimum fraction,
/// then the resulting dollar delta is rounded up to whole divisions and
/// credited via [`Employee::apply_increment`] on top of the bump, so both
/// contribute to the final salary and the rounds counter. Returns the
/// number of divisions consumed.
///
/// The minimum must have been resolved first; an unresolved minimum is
/// treated as zero.
pub fn apply_minimum_raise(employee: &mut Employee, divisions: Decimal) -> EngineResult<u32> {
    let min_increase = employee.min_increase_percent.unwrap_or(Decimal::ZERO);
    employee.new_salary += employee.new_salary * min_increase;

    let rounds = (employee.salary_delta() / divisions)
        .ceil()
        .to_u32()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "minimum raise for '{}' does not convert to a whole division count",
                employee.name
            ),
        })?;
    employee.apply_increment(divisions, rounds);
    Ok(rounds)
}

/// Runs the full first phase over all employees in input order.
///
/// Returns the pool remaining after all mandatory minimum raises.
///
/// # Errors
///
/// Fails with [`EngineError::InsufficientPool`] as soon as the running
/// pool goes negative: the pool cannot satisfy the mandatory minimums,
/// so the run aborts before any discretionary distribution.
pub fn apply_minimum_raises(
    employees: &mut [Employee],
    options: &AllocatorOptions,
) -> EngineResult<Decimal> {
    let mut pool_remaining = options.pool;

    for employee in employees.iter_mut() {
        resolve_bounds(employee, options)?;
        let rounds = apply_minimum_raise(employee, options.divisions)?;
        pool_remaining -= options.divisions * Decimal::from(rounds);

        debug!(
            name = %employee.name,
            rounds,
            new_salary = %employee.new_salary,
            pool_remaining = %pool_remaining,
            "applied minimum raise"
        );

        if pool_remaining < Decimal::ZERO {
            return Err(EngineError::InsufficientPool {
                pool: options.pool,
                min_increase: options.min_salary_increase,
            });
        }
    }

    info!(pool_remaining = %pool_remaining, "minimum raises applied");
    Ok(pool_remaining)
}
