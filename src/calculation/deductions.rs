//! Statutory deduction calculation functionality.
//!
//! This module computes the three statutory withholdings (PhilHealth, SSS,
//! Pag-IBIG) from a base salary, using the rates and thresholds of the
//! active [`DeductionPolicy`](crate::config::DeductionPolicy).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DeductionPolicy;

/// The statutory deductions withheld from one line item's base salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// PhilHealth contribution (`base_salary × philhealth_rate`).
    pub philhealth: Decimal,
    /// SSS contribution (`base_salary × sss_rate`).
    pub sss: Decimal,
    /// Pag-IBIG contribution: the flat amount once base salary exceeds the
    /// threshold, zero otherwise.
    pub pagibig: Decimal,
    /// Sum of the three deductions.
    pub total: Decimal,
}

/// Computes the statutory deduction breakdown for a base salary.
///
/// The percentage contributions are straight products of the base salary and
/// the policy rates; Pag-IBIG is a flat amount due only when the base salary
/// is strictly greater than the policy threshold. No rounding is applied;
/// figures keep full decimal precision so the salary identity holds exactly.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
/// use payroll_engine::config::DeductionPolicy;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_deductions(Decimal::new(8400, 0), &DeductionPolicy::default());
/// assert_eq!(breakdown.philhealth, Decimal::new(18900, 2)); // 189.00
/// assert_eq!(breakdown.sss, Decimal::new(47292, 2));        // 472.92
/// assert_eq!(breakdown.pagibig, Decimal::new(100, 0));      // over the 5000 threshold
/// assert_eq!(breakdown.total, Decimal::new(76192, 2));      // 761.92
/// ```
pub fn calculate_deductions(base_salary: Decimal, policy: &DeductionPolicy) -> DeductionBreakdown {
    let philhealth = base_salary * policy.philhealth_rate;
    let sss = base_salary * policy.sss_rate;
    let pagibig = if base_salary > policy.pagibig_threshold {
        policy.pagibig_flat
    } else {
        Decimal::ZERO
    };

    DeductionBreakdown {
        philhealth,
        sss,
        pagibig,
        total: philhealth + sss + pagibig,
    }
}
