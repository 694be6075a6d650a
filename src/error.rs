//! Error types for the merit distribution engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a distribution run.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the merit distribution engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use merit_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A performance rating has no entry in the rating translation table.
    #[error("Rating {rating} has no entry in the performance translation table")]
    RatingNotFound {
        /// The rating that was not found.
        rating: u8,
    },

    /// The pool cannot cover the mandatory minimum raises for all employees.
    #[error(
        "Pool of {pool} is too small to meet minimum raises for all employees at a minimum salary increase of {min_increase}"
    )]
    InsufficientPool {
        /// The configured pool amount.
        pool: Decimal,
        /// The configured minimum salary increase floor.
        min_increase: Decimal,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee '{name}': {message}")]
    InvalidEmployee {
        /// The name of the invalid employee record.
        name: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// A report could not be rendered.
    #[error("Report error: {message}")]
    ReportError {
        /// A description of the report failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
