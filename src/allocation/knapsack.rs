//! Greedy discretionary distribution.
//!
//! This module implements the second phase of a distribution run: the
//! remaining pool is handed out one division at a time to the employee
//! with the best knapsack ratio, until the pool cannot fund another
//! division or nobody is eligible to take one.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::Employee;

/// Selects the winner of one discretionary division, if any.
///
/// Scans all employees in input order and tracks the strictly greatest
/// knapsack ratio, starting the threshold at zero so non-positive ratios
/// never win. Ties therefore go to the earliest employee. An employee is
/// only eligible while awarding the division keeps them strictly below
/// the top of their pay band; employees whose value score has no valid
/// domain are skipped outright.
pub fn select_winner(employees: &[Employee], divisions: Decimal) -> Option<usize> {
    let mut best_pick = None;
    let mut max_ratio = 0.0_f64;

    for (i, employee) in employees.iter().enumerate() {
        let Some(ratio) = employee.knapsack_ratio(divisions) else {
            continue;
        };
        if ratio > max_ratio && employee.projected_mrp_percent(divisions) < employee.band_top_ratio
        {
            best_pick = Some(i);
            max_ratio = ratio;
        }
    }

    best_pick
}

/// Distributes the remaining pool greedily, one division per round.
///
/// Each round tentatively deducts one division, re-ranks every employee,
/// and awards the division to the winner. When no winner exists the
/// tentatively deducted division is returned to the pool and the loop
/// stops: every remaining employee is either over their band ceiling or
/// scores a non-positive ratio, so no further progress is possible.
///
/// Returns the leftover pool. Terminates after at most
/// `pool_remaining / divisions` rounds, since every round either spends a
/// division or breaks.
pub fn distribute_pool(
    employees: &mut [Employee],
    pool_remaining: Decimal,
    divisions: Decimal,
) -> Decimal {
    let mut pool_remaining = pool_remaining;
    let mut rounds = 0u32;

    while pool_remaining >= divisions {
        pool_remaining -= divisions;

        match select_winner(employees, divisions) {
            Some(i) => {
                employees[i].apply_increment(divisions, 1);
                rounds += 1;
                debug!(
                    name = %employees[i].name,
                    new_salary = %employees[i].new_salary,
                    pool_remaining = %pool_remaining,
                    "won division"
                );
            }
            None => {
                // Put the untaken division back so the reported leftover
                // stays accurate.
                pool_remaining += divisions;
                warn!(
                    rounds,
                    pool_remaining = %pool_remaining,
                    "no eligible winner remains, stopping early"
                );
                break;
            }
        }
    }

    debug!(rounds, pool_remaining = %pool_remaining, "discretionary distribution finished");
    pool_remaining
}
