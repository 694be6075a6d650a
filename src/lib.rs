//! Merit increase distribution engine.
//!
//! This crate distributes a fixed monetary pool as salary increases
//! across a set of employees. Minimum guaranteed raises are applied
//! first, then the remaining pool is handed out in fixed divisions using
//! a knapsack-style value-to-cost ranking that favors employees low in
//! their pay band, while never pushing anyone over their band ceiling.

#![warn(missing_docs)]

pub mod allocation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
