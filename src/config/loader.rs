//! Configuration loading functionality.
//!
//! This module reads the two YAML inputs of a distribution run: the run
//! options and the employee records.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeRecord};

use super::types::AllocatorOptions;

/// Loads and parses a YAML file.
fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}

/// Loads run options from a YAML file.
///
/// Missing recognized keys fall back to their defaults; unrecognized
/// keys are ignored.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file cannot be read and
/// `ConfigParseError` if it is not valid YAML for the options shape.
///
/// # Example
///
/// ```no_run
/// use merit_engine::config::load_options;
///
/// let options = load_options("./config/options.yaml")?;
/// println!("Distributing a pool of {}", options.pool);
/// # Ok::<(), merit_engine::error::EngineError>(())
/// ```
pub fn load_options<P: AsRef<Path>>(path: P) -> EngineResult<AllocatorOptions> {
    load_yaml(path.as_ref())
}

/// Loads employee records from a YAML file and resolves them into
/// [`Employee`] entities.
///
/// The file holds a sequence of records, each minimally supplying
/// `name`, `current_salary` and `mrp`; see [`EmployeeRecord`] for the
/// optional overrides.
///
/// # Errors
///
/// Returns `ConfigNotFound`/`ConfigParseError` for file problems and
/// `InvalidEmployee` when a record fails validation.
///
/// # Example
///
/// ```no_run
/// use merit_engine::config::load_employees;
///
/// let employees = load_employees("./config/employees.yaml")?;
/// println!("Loaded {} employees", employees.len());
/// # Ok::<(), merit_engine::error::EngineError>(())
/// ```
pub fn load_employees<P: AsRef<Path>>(path: P) -> EngineResult<Vec<Employee>> {
    let records: Vec<EmployeeRecord> = load_yaml(path.as_ref())?;
    records.into_iter().map(Employee::from_record).collect()
}
