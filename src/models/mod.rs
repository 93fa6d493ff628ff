//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod payroll;
mod payslip;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::EmployeeProfile;
pub use payroll::{GenerationStatus, PayrollLineItem};
pub use payslip::{
    ApprovalStatus, PaymentProof, PaymentStatus, Payslip, PayslipItem, TrackState,
};
