//! Command-line entry point for the merit distributor.
//!
//! Loads run options and employee records from YAML, runs the
//! distribution, and prints the summary report to stdout.

use std::env;
use std::io;
use std::process::ExitCode;

use merit_engine::allocation::allocate;
use merit_engine::config::{load_employees, load_options};
use merit_engine::error::EngineResult;
use merit_engine::models::AllocationOutcome;
use merit_engine::report::write_report;
use tracing::{error, info};

const DEFAULT_OPTIONS_PATH: &str = "./config/options.yaml";
const DEFAULT_EMPLOYEES_PATH: &str = "./config/employees.yaml";

fn run(options_path: &str, employees_path: &str) -> EngineResult<AllocationOutcome> {
    let options = load_options(options_path)?;
    let mut employees = load_employees(employees_path)?;
    info!(
        pool = %options.pool,
        employees = employees.len(),
        "inputs loaded"
    );

    let leftover = allocate(&mut employees, &options)?;
    Ok(AllocationOutcome::new(&employees, options.pool, leftover))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let options_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OPTIONS_PATH.to_string());
    let employees_path = env::args()
        .nth(2)
        .unwrap_or_else(|| DEFAULT_EMPLOYEES_PATH.to_string());

    info!(
        options = %options_path,
        employees = %employees_path,
        version = env!("CARGO_PKG_VERSION"),
        "merit distributor starting"
    );

    match run(&options_path, &employees_path) {
        Ok(outcome) => {
            if let Err(e) = write_report(&mut io::stdout(), &outcome) {
                error!(error = %e, "failed to write report");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "distribution run failed");
            ExitCode::FAILURE
        }
    }
}
