//! Configuration loading and management for the merit distribution engine.
//!
//! This module provides the run options type and the YAML loaders for
//! options and employee records.
//!
//! # Example
//!
//! ```no_run
//! use merit_engine::config::{load_employees, load_options};
//!
//! let options = load_options("./config/options.yaml").unwrap();
//! let employees = load_employees("./config/employees.yaml").unwrap();
//! println!("Distributing {} across {} employees", options.pool, employees.len());
//! ```

mod loader;
mod types;

pub use loader::{load_employees, load_options};
pub use types::AllocatorOptions;
