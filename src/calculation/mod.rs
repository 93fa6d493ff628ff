//! Calculation logic for the payroll engine.
//!
//! This module contains the pure computation functions for turning raw
//! attendance into monetary figures: attendance aggregation into worked
//! hours per employee, the period day count and normal-hours cap, the
//! overtime split and premium, the statutory deduction breakdown, and the
//! final salary composition.

mod deductions;
mod hours;
mod overtime;
mod salary;

pub use deductions::{DeductionBreakdown, calculate_deductions};
pub use hours::{AggregatedHours, AttendanceRollup, aggregate_hours};
pub use overtime::{
    OvertimeSplit, normal_hours_cap, overtime_pay, period_day_count, split_overtime,
};
pub use salary::{SalaryComputation, compute_salary};
