//! Configuration loading and management for the payroll engine.
//!
//! This module provides the payroll policy types and the loader that reads
//! them from a YAML file, covering overtime parameters and statutory
//! deduction rates.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::load_policy;
//!
//! let policy = load_policy("./config/payroll/policy.yaml").unwrap();
//! println!("Daily normal hours: {}", policy.overtime.daily_normal_hours);
//! ```

mod loader;
mod types;

pub use loader::load_policy;
pub use types::{
    DeductionPolicy, OvertimePolicy, PayrollPolicy, DEFAULT_DAILY_NORMAL_HOURS,
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_PAGIBIG_FLAT, DEFAULT_PAGIBIG_THRESHOLD,
    DEFAULT_PHILHEALTH_RATE, DEFAULT_SSS_RATE,
};
