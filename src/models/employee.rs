//! Employee model and related types.
//!
//! This module defines the [`EmployeeRecord`] input row and the [`Employee`]
//! entity that the allocator mutates over the course of a distribution run.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

fn default_rating() -> u8 {
    3
}

fn default_band_top_ratio() -> Decimal {
    // 120% of MRP
    Decimal::new(12, 1)
}

fn default_band_bottom_ratio() -> Decimal {
    // 80% of MRP
    Decimal::new(8, 1)
}

fn default_perf_weight() -> Decimal {
    Decimal::ONE
}

/// A raw employee row as supplied by the input file.
///
/// Records are deserialized as-is and carry optional overrides; derived
/// defaults are resolved by [`Employee::from_record`], never by the
/// deserializer itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmployeeRecord {
    /// Identifier for the employee.
    pub name: String,
    /// The employee's current salary.
    pub current_salary: Decimal,
    /// The market reference point for the employee's role.
    pub mrp: Decimal,
    /// Numeric performance rating, used as a key into the rating
    /// translation table.
    #[serde(default = "default_rating")]
    pub rating: u8,
    /// Top of the pay band as a multiple of MRP.
    #[serde(default = "default_band_top_ratio")]
    pub band_top_ratio: Decimal,
    /// Bottom of the pay band as a multiple of MRP.
    #[serde(default = "default_band_bottom_ratio")]
    pub band_bottom_ratio: Decimal,
    /// Performance weighting. Overwritten from the rating translation
    /// table during bound resolution, so a supplied value only matters
    /// until the run starts.
    #[serde(default = "default_perf_weight")]
    pub perf_weight: Decimal,
    /// Optional minimum required increase fraction. A supplied 0 is
    /// treated the same as absent: "derive it".
    #[serde(default)]
    pub min_increase_percent: Option<Decimal>,
    /// Optional ceiling override on the increase fraction. Derived from
    /// the band top when absent.
    #[serde(default)]
    pub max_increase_percent: Option<Decimal>,
}

impl EmployeeRecord {
    /// Creates a record with the three required fields and defaults for
    /// everything else.
    ///
    /// # Example
    ///
    /// ```
    /// use merit_engine::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord::new("Avery", Decimal::from(52_000), Decimal::from(50_000));
    /// assert_eq!(record.rating, 3);
    /// ```
    pub fn new(name: impl Into<String>, current_salary: Decimal, mrp: Decimal) -> Self {
        Self {
            name: name.into(),
            current_salary,
            mrp,
            rating: default_rating(),
            band_top_ratio: default_band_top_ratio(),
            band_bottom_ratio: default_band_bottom_ratio(),
            perf_weight: default_perf_weight(),
            min_increase_percent: None,
            max_increase_percent: None,
        }
    }
}

/// An employee being evaluated for a merit increase.
///
/// Built once from an [`EmployeeRecord`], mutated in place by the
/// allocator (bounds resolved, increments applied), and read only
/// thereafter by the report sink.
///
/// # Example
///
/// ```
/// use merit_engine::models::{Employee, EmployeeRecord};
/// use rust_decimal::Decimal;
///
/// let record = EmployeeRecord::new("Avery", Decimal::from(52_000), Decimal::from(50_000));
/// let employee = Employee::from_record(record).unwrap();
/// assert_eq!(employee.new_salary, Decimal::from(52_000));
/// assert_eq!(employee.rounds_won, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Identifier for the employee.
    pub name: String,
    /// The employee's salary coming into the run. Never modified.
    pub current_salary: Decimal,
    /// The market reference point for the employee's role.
    pub mrp: Decimal,
    /// Numeric performance rating.
    pub rating: u8,
    /// Top of the pay band as a multiple of MRP.
    pub band_top_ratio: Decimal,
    /// Bottom of the pay band as a multiple of MRP.
    pub band_bottom_ratio: Decimal,
    /// Performance weighting on the value score. Zero means the
    /// employee is ineligible for discretionary increases.
    pub perf_weight: Decimal,
    /// Minimum required increase fraction. `None` until resolved by the
    /// allocator, which owns the derivation because it depends on
    /// run-wide configuration.
    pub min_increase_percent: Option<Decimal>,
    /// Ceiling on the increase fraction. Resolved at construction and
    /// stable for the run, except that a zero performance weight
    /// collapses it down to the resolved minimum.
    pub max_increase_percent: Decimal,
    /// Running new salary, starting at `current_salary`.
    pub new_salary: Decimal,
    /// Number of pool divisions won so far.
    pub rounds_won: u32,
}

impl Employee {
    /// Builds an employee from a raw record, validating it and resolving
    /// derived defaults.
    ///
    /// The maximum increase defaults to the headroom up to the band top,
    /// `band_top_ratio * mrp / current_salary - 1`, unless the record
    /// supplies an override. A minimum increase of 0 is normalized to
    /// "unset" for the allocator to derive.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] when `current_salary` or
    /// `mrp` is not positive, when a band ratio is not positive, or when
    /// a supplied minimum increase is negative (increases are monotonic).
    pub fn from_record(record: EmployeeRecord) -> EngineResult<Self> {
        if record.current_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                name: record.name,
                message: "current_salary must be positive".to_string(),
            });
        }
        if record.mrp <= Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                name: record.name,
                message: "mrp must be positive".to_string(),
            });
        }
        if record.band_top_ratio <= Decimal::ZERO || record.band_bottom_ratio <= Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                name: record.name,
                message: "band ratios must be positive".to_string(),
            });
        }
        if record
            .min_increase_percent
            .is_some_and(|p| p < Decimal::ZERO)
        {
            return Err(EngineError::InvalidEmployee {
                name: record.name,
                message: "min_increase_percent must not be negative".to_string(),
            });
        }

        let max_increase_percent = record.max_increase_percent.unwrap_or_else(|| {
            record.band_top_ratio * record.mrp / record.current_salary - Decimal::ONE
        });

        Ok(Self {
            name: record.name,
            current_salary: record.current_salary,
            mrp: record.mrp,
            rating: record.rating,
            band_top_ratio: record.band_top_ratio,
            band_bottom_ratio: record.band_bottom_ratio,
            perf_weight: record.perf_weight,
            min_increase_percent: record.min_increase_percent.filter(|p| !p.is_zero()),
            max_increase_percent,
            new_salary: record.current_salary,
            rounds_won: 0,
        })
    }

    /// Returns the current salary as a fraction of MRP.
    pub fn current_mrp_percent(&self) -> Decimal {
        self.current_salary / self.mrp
    }

    /// Returns the running new salary, plus an optional extra amount, as
    /// a fraction of MRP.
    pub fn projected_mrp_percent(&self, extra: Decimal) -> Decimal {
        (self.new_salary + extra) / self.mrp
    }

    /// Returns the absolute difference between the running new salary
    /// and the current salary.
    pub fn salary_delta(&self) -> Decimal {
        self.new_salary - self.current_salary
    }

    /// Returns the fractional difference between the running new salary
    /// and the current salary.
    pub fn salary_percent_delta(&self) -> Decimal {
        self.new_salary / self.current_salary - Decimal::ONE
    }

    /// Computes the value half of the knapsack ratio for a proposed
    /// increase.
    ///
    /// Value is the performance weight times the log base `1/e` (the
    /// negated natural log) of the product of two factors, both
    /// evaluated at `new_salary + proposed`: distance above the band
    /// floor, and the MRP movement relative to the current (no-increase)
    /// position. The log boosts small positive products, so employees
    /// that are low in their band and would see a large proportional
    /// move score highest.
    ///
    /// Returns `None` when the product is non-positive, which the caller
    /// must treat as "not a valid candidate" rather than a failure.
    ///
    /// # Example
    ///
    /// ```
    /// use merit_engine::models::{Employee, EmployeeRecord};
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord::new("Avery", Decimal::from(50_000), Decimal::from(50_000));
    /// let employee = Employee::from_record(record).unwrap();
    ///
    /// let score = employee.value_score(Decimal::from(100)).unwrap();
    /// assert!(score > 0.0);
    /// // A zero increase moves nothing, so there is no value to score.
    /// assert!(employee.value_score(Decimal::ZERO).is_none());
    /// ```
    pub fn value_score(&self, proposed: Decimal) -> Option<f64> {
        let after = self.projected_mrp_percent(proposed).to_f64()?;
        let floor = self.band_bottom_ratio.to_f64()?;
        let current = self.projected_mrp_percent(Decimal::ZERO).to_f64()?;

        let dist_from_floor = after - floor;
        let mrp_delta = after - current;
        let product = dist_from_floor * mrp_delta;
        if product <= 0.0 {
            return None;
        }

        let weight = self.perf_weight.to_f64()?;
        Some(weight * -product.ln())
    }

    /// Computes the cost half of the knapsack ratio.
    ///
    /// Cost is the number of rounds won plus one, so it rises as an
    /// employee keeps winning and dampens runaway winners.
    pub fn cost_score(&self) -> f64 {
        f64::from(self.rounds_won + 1)
    }

    /// Computes the value-to-cost ratio used to rank candidates for a
    /// discretionary division. `None` propagates from [`Self::value_score`].
    pub fn knapsack_ratio(&self, proposed: Decimal) -> Option<f64> {
        Some(self.value_score(proposed)? / self.cost_score())
    }

    /// Awards `times` divisions of `amount` to the employee.
    ///
    /// Adds to the running new salary and the rounds counter. No ceiling
    /// is enforced here; the allocator checks the pay band before
    /// calling.
    pub fn apply_increment(&mut self, amount: Decimal, times: u32) {
        self.new_salary += amount * Decimal::from(times);
        self.rounds_won += times;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(current_salary: &str, mrp: &str) -> Employee {
        Employee::from_record(EmployeeRecord::new("emp_001", dec(current_salary), dec(mrp)))
            .unwrap()
    }

    #[test]
    fn test_from_record_fills_defaults() {
        let employee = create_test_employee("52000", "50000");

        assert_eq!(employee.rating, 3);
        assert_eq!(employee.band_top_ratio, dec("1.2"));
        assert_eq!(employee.band_bottom_ratio, dec("0.8"));
        assert_eq!(employee.perf_weight, dec("1"));
        assert_eq!(employee.min_increase_percent, None);
        assert_eq!(employee.new_salary, dec("52000"));
        assert_eq!(employee.rounds_won, 0);
    }

    #[test]
    fn test_max_increase_derived_from_band_top() {
        let employee = create_test_employee("50000", "50000");

        // 1.2 * 50000 / 50000 - 1
        assert_eq!(employee.max_increase_percent, dec("0.2"));
    }

    #[test]
    fn test_max_increase_override_preserved() {
        let mut record = EmployeeRecord::new("emp_001", dec("50000"), dec("50000"));
        record.max_increase_percent = Some(dec("0.05"));

        let employee = Employee::from_record(record).unwrap();
        assert_eq!(employee.max_increase_percent, dec("0.05"));
    }

    #[test]
    fn test_max_increase_negative_when_above_band_top() {
        let employee = create_test_employee("65000", "50000");

        assert!(employee.max_increase_percent < Decimal::ZERO);
    }

    #[test]
    fn test_zero_min_increase_treated_as_unset() {
        let mut record = EmployeeRecord::new("emp_001", dec("50000"), dec("50000"));
        record.min_increase_percent = Some(Decimal::ZERO);

        let employee = Employee::from_record(record).unwrap();
        assert_eq!(employee.min_increase_percent, None);
    }

    #[test]
    fn test_nonzero_min_increase_preserved() {
        let mut record = EmployeeRecord::new("emp_001", dec("50000"), dec("50000"));
        record.min_increase_percent = Some(dec("0.03"));

        let employee = Employee::from_record(record).unwrap();
        assert_eq!(employee.min_increase_percent, Some(dec("0.03")));
    }

    #[test]
    fn test_nonpositive_salary_rejected() {
        let record = EmployeeRecord::new("emp_001", Decimal::ZERO, dec("50000"));

        match Employee::from_record(record) {
            Err(EngineError::InvalidEmployee { name, message }) => {
                assert_eq!(name, "emp_001");
                assert!(message.contains("current_salary"));
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_nonpositive_mrp_rejected() {
        let record = EmployeeRecord::new("emp_001", dec("50000"), Decimal::ZERO);

        assert!(Employee::from_record(record).is_err());
    }

    #[test]
    fn test_negative_min_increase_rejected() {
        let mut record = EmployeeRecord::new("emp_001", dec("50000"), dec("50000"));
        record.min_increase_percent = Some(dec("-0.05"));

        match Employee::from_record(record) {
            Err(EngineError::InvalidEmployee { message, .. }) => {
                assert!(message.contains("min_increase_percent"));
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_mrp_percent_projections() {
        let employee = create_test_employee("45000", "50000");

        assert_eq!(employee.current_mrp_percent(), dec("0.9"));
        assert_eq!(employee.projected_mrp_percent(Decimal::ZERO), dec("0.9"));
        assert_eq!(employee.projected_mrp_percent(dec("5000")), dec("1"));
    }

    #[test]
    fn test_salary_deltas_track_increments() {
        let mut employee = create_test_employee("50000", "50000");
        assert_eq!(employee.salary_delta(), Decimal::ZERO);
        assert_eq!(employee.salary_percent_delta(), Decimal::ZERO);

        employee.apply_increment(dec("100"), 5);

        assert_eq!(employee.salary_delta(), dec("500"));
        assert_eq!(employee.salary_percent_delta(), dec("0.01"));
    }

    #[test]
    fn test_apply_increment_updates_salary_and_rounds() {
        let mut employee = create_test_employee("50000", "50000");

        employee.apply_increment(dec("100"), 1);
        assert_eq!(employee.new_salary, dec("50100"));
        assert_eq!(employee.rounds_won, 1);

        employee.apply_increment(dec("100"), 3);
        assert_eq!(employee.new_salary, dec("50400"));
        assert_eq!(employee.rounds_won, 4);
    }

    #[test]
    fn test_cost_score_rises_with_rounds() {
        let mut employee = create_test_employee("50000", "50000");
        assert_eq!(employee.cost_score(), 1.0);

        employee.apply_increment(dec("100"), 4);
        assert_eq!(employee.cost_score(), 5.0);
    }

    #[test]
    fn test_value_score_positive_within_band() {
        let employee = create_test_employee("50000", "50000");

        let score = employee.value_score(dec("100")).unwrap();
        assert!(score > 0.0);
    }

    #[test]
    fn test_value_score_none_below_band_floor() {
        // 30000 / 50000 = 0.6 MRP, below the 0.8 floor: the distance
        // factor is negative and the product non-positive.
        let employee = create_test_employee("30000", "50000");

        assert!(employee.value_score(dec("100")).is_none());
    }

    #[test]
    fn test_value_score_none_for_zero_increase() {
        let employee = create_test_employee("50000", "50000");

        assert!(employee.value_score(Decimal::ZERO).is_none());
    }

    #[test]
    fn test_value_score_zero_for_zero_weight() {
        let mut employee = create_test_employee("50000", "50000");
        employee.perf_weight = Decimal::ZERO;

        assert_eq!(employee.value_score(dec("100")), Some(0.0));
        assert_eq!(employee.knapsack_ratio(dec("100")), Some(0.0));
    }

    #[test]
    fn test_knapsack_ratio_drops_after_winning() {
        let mut employee = create_test_employee("50000", "50000");

        let before = employee.knapsack_ratio(dec("100")).unwrap();
        employee.apply_increment(dec("100"), 1);
        let after = employee.knapsack_ratio(dec("100")).unwrap();

        assert!(after < before);
    }

    #[test]
    fn test_lower_in_band_scores_higher() {
        // Same band position math as the original: the employee farther
        // below MRP sees a larger proportional move per division.
        let low = create_test_employee("42500", "50000");
        let high = create_test_employee("55000", "50000");

        let low_score = low.value_score(dec("100")).unwrap();
        let high_score = high.value_score(dec("100")).unwrap();
        assert!(low_score > high_score);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let yaml = r#"
name: emp_001
current_salary: 52000
mrp: 50000
"#;

        let record: EmployeeRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.name, "emp_001");
        assert_eq!(record.current_salary, dec("52000"));
        assert_eq!(record.rating, 3);
        assert_eq!(record.band_top_ratio, dec("1.2"));
        assert_eq!(record.min_increase_percent, None);
    }

    #[test]
    fn test_deserialize_record_with_overrides() {
        let yaml = r#"
name: emp_002
current_salary: 61000
mrp: 50000
rating: 5
band_top_ratio: 1.3
min_increase_percent: 0.02
"#;

        let record: EmployeeRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.rating, 5);
        assert_eq!(record.band_top_ratio, dec("1.3"));
        assert_eq!(record.min_increase_percent, Some(dec("0.02")));
    }
}
