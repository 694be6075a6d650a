//! Configuration types for merit distribution.
//!
//! This module contains the strongly-typed run configuration that is
//! deserialized from the options YAML file.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

fn default_pool() -> Decimal {
    Decimal::from(10_000)
}

fn default_divisions() -> Decimal {
    Decimal::from(100)
}

fn default_perf_translate() -> HashMap<u8, Decimal> {
    HashMap::from([
        (1, Decimal::ZERO),
        (2, Decimal::ZERO),
        (3, Decimal::ONE),
        (4, Decimal::new(15, 1)),
        (5, Decimal::from(2)),
    ])
}

fn default_min_salary_increase() -> Decimal {
    // 1.5%
    Decimal::new(15, 3)
}

/// Immutable run-wide parameters for a distribution run.
///
/// Every field has a default, so an empty options file yields a usable
/// configuration. Unrecognized keys in the file are ignored.
///
/// # Example
///
/// ```
/// use merit_engine::config::AllocatorOptions;
/// use rust_decimal::Decimal;
///
/// let options = AllocatorOptions::default();
/// assert_eq!(options.pool, Decimal::from(10_000));
/// assert_eq!(options.divisions, Decimal::from(100));
/// assert!(!options.bad_performer_gets_min);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AllocatorOptions {
    /// Total monetary pool to distribute.
    #[serde(default = "default_pool")]
    pub pool: Decimal,
    /// Size of the discrete increment unit. Every allocation step moves
    /// the pool by a whole number of these.
    #[serde(default = "default_divisions")]
    pub divisions: Decimal,
    /// Translation table from performance rating to performance weight.
    #[serde(default = "default_perf_translate")]
    pub perf_translate: HashMap<u8, Decimal>,
    /// Minimum guaranteed salary increase fraction.
    #[serde(default = "default_min_salary_increase")]
    pub min_salary_increase: Decimal,
    /// Whether employees with a zero performance weight still receive
    /// the minimum increase.
    #[serde(default)]
    pub bad_performer_gets_min: bool,
}

impl Default for AllocatorOptions {
    fn default() -> Self {
        Self {
            pool: default_pool(),
            divisions: default_divisions(),
            perf_translate: default_perf_translate(),
            min_salary_increase: default_min_salary_increase(),
            bad_performer_gets_min: false,
        }
    }
}

impl AllocatorOptions {
    /// Looks up the performance weight for a rating.
    pub fn weight_for_rating(&self, rating: u8) -> Option<Decimal> {
        self.perf_translate.get(&rating).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let options = AllocatorOptions::default();

        assert_eq!(options.pool, dec("10000"));
        assert_eq!(options.divisions, dec("100"));
        assert_eq!(options.min_salary_increase, dec("0.015"));
        assert!(!options.bad_performer_gets_min);
    }

    #[test]
    fn test_default_perf_translate_table() {
        let options = AllocatorOptions::default();

        assert_eq!(options.weight_for_rating(1), Some(Decimal::ZERO));
        assert_eq!(options.weight_for_rating(2), Some(Decimal::ZERO));
        assert_eq!(options.weight_for_rating(3), Some(Decimal::ONE));
        assert_eq!(options.weight_for_rating(4), Some(dec("1.5")));
        assert_eq!(options.weight_for_rating(5), Some(dec("2")));
        assert_eq!(options.weight_for_rating(6), None);
    }

    #[test]
    fn test_deserialize_empty_document_uses_defaults() {
        let options: AllocatorOptions = serde_yaml::from_str("{}").unwrap();
        assert_eq!(options, AllocatorOptions::default());
    }

    #[test]
    fn test_deserialize_partial_overrides() {
        let yaml = r#"
pool: 25000
min_salary_increase: 0.02
"#;

        let options: AllocatorOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(options.pool, dec("25000"));
        assert_eq!(options.min_salary_increase, dec("0.02"));
        // Untouched keys fall back to defaults.
        assert_eq!(options.divisions, dec("100"));
        assert_eq!(options.weight_for_rating(3), Some(Decimal::ONE));
    }

    #[test]
    fn test_deserialize_ignores_unrecognized_keys() {
        let yaml = r#"
pool: 5000
carry_forward: true
fiscal_year: 2026
"#;

        let options: AllocatorOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(options.pool, dec("5000"));
    }

    #[test]
    fn test_deserialize_perf_translate_override() {
        let yaml = r#"
perf_translate:
  1: 0
  2: 0.5
  3: 1
"#;

        let options: AllocatorOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(options.weight_for_rating(2), Some(dec("0.5")));
        assert_eq!(options.weight_for_rating(4), None);
    }
}
