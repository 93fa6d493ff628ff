//! Employee registry model.
//!
//! This module defines the [`EmployeeProfile`] struct, the engine's read-only
//! view of one row in the Employee Registry collaborator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One employee as known to the Employee Registry.
///
/// The registry is owned by a collaborator; this core only reads it to
/// resolve hourly rates during payroll generation. Employee identifiers are
/// opaque strings assigned by the registry.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::EmployeeProfile;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeProfile {
///     id: "emp_001".to_string(),
///     full_name: "Rosa Dalisay".to_string(),
///     hourly_rate: Decimal::new(10000, 2), // 100.00
/// };
/// assert_eq!(employee.hourly_rate, Decimal::new(10000, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier assigned by the registry.
    pub id: String,
    /// The employee's display name, carried onto payslip views.
    pub full_name: String,
    /// The agreed hourly rate used for pay computation.
    pub hourly_rate: Decimal,
}
