//! Payroll Computation and Approval Engine
//!
//! This crate turns raw attendance records into per-employee pay figures for a
//! period, batches them into reviewable payslips, and drives each batch through
//! HR, Finance, and executive review to a released, signed payment.

#![warn(missing_docs)]

pub mod approval;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
