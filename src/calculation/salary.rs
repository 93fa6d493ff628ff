//! Salary composition functionality.
//!
//! This module composes aggregated hours, the overtime split, and the
//! statutory deductions into the full set of monetary figures for one
//! employee's pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollPolicy;

use super::deductions::{DeductionBreakdown, calculate_deductions};
use super::overtime::{overtime_pay, split_overtime};

/// The complete computed figure set for one employee and one period.
///
/// Satisfies `final_salary == base_salary + overtime_pay - deductions.total`
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComputation {
    /// Total worked hours feeding the computation.
    pub total_hours: Decimal,
    /// Pay for all worked hours at the plain hourly rate.
    pub base_salary: Decimal,
    /// Hours beyond the period's normal-hours cap.
    pub overtime_hours: Decimal,
    /// Premium paid on the overtime hours.
    pub overtime_pay: Decimal,
    /// The statutory deduction breakdown.
    pub deductions: DeductionBreakdown,
    /// Net pay after the premium and deductions.
    pub final_salary: Decimal,
}

/// Computes the full salary figure set for one employee.
///
/// `base_salary` covers every worked hour at the plain rate; the overtime
/// premium is added on top for hours beyond `normal_cap`; the statutory
/// deductions come off the base salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_salary;
/// use payroll_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 84 hours at 100/h over a 10-day period (cap 80)
/// let figures = compute_salary(
///     Decimal::from_str("84").unwrap(),
///     Decimal::from_str("100").unwrap(),
///     Decimal::from_str("80").unwrap(),
///     &PayrollPolicy::default(),
/// );
///
/// assert_eq!(figures.base_salary, Decimal::from_str("8400").unwrap());
/// assert_eq!(figures.overtime_hours, Decimal::from_str("4").unwrap());
/// assert_eq!(figures.overtime_pay, Decimal::from_str("600").unwrap());
/// assert_eq!(figures.deductions.total, Decimal::from_str("761.92").unwrap());
/// assert_eq!(figures.final_salary, Decimal::from_str("8238.08").unwrap());
/// ```
pub fn compute_salary(
    total_hours: Decimal,
    hourly_rate: Decimal,
    normal_cap: Decimal,
    policy: &PayrollPolicy,
) -> SalaryComputation {
    let base_salary = total_hours * hourly_rate;
    let split = split_overtime(total_hours, normal_cap);
    let overtime_premium = overtime_pay(
        split.overtime_hours,
        hourly_rate,
        policy.overtime.overtime_multiplier,
    );
    let deductions = calculate_deductions(base_salary, &policy.deductions);
    let final_salary = base_salary + overtime_premium - deductions.total;

    SalaryComputation {
        total_hours,
        base_salary,
        overtime_hours: split.overtime_hours,
        overtime_pay: overtime_premium,
        deductions,
        final_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // Reference scenario: rate 100, 10-day period (cap 80), 84 hours worked
    // ==========================================================================
    #[test]
    fn test_reference_scenario_full_figures() {
        let figures = compute_salary(dec("84"), dec("100"), dec("80"), &PayrollPolicy::default());

        assert_eq!(figures.total_hours, dec("84"));
        assert_eq!(figures.base_salary, dec("8400"));
        assert_eq!(figures.overtime_hours, dec("4"));
        assert_eq!(figures.overtime_pay, dec("600"));
        assert_eq!(figures.deductions.philhealth, dec("189"));
        assert_eq!(figures.deductions.sss, dec("472.92"));
        assert_eq!(figures.deductions.pagibig, dec("100"));
        assert_eq!(figures.deductions.total, dec("761.92"));
        assert_eq!(figures.final_salary, dec("8238.08"));
    }

    #[test]
    fn test_no_overtime_under_cap() {
        let figures = compute_salary(dec("72"), dec("100"), dec("80"), &PayrollPolicy::default());

        assert_eq!(figures.base_salary, dec("7200"));
        assert_eq!(figures.overtime_hours, dec("0"));
        assert_eq!(figures.overtime_pay, dec("0"));
    }

    #[test]
    fn test_small_salary_skips_pagibig() {
        // 40 h at 100/h = 4000 base, under the 5000 Pag-IBIG threshold
        let figures = compute_salary(dec("40"), dec("100"), dec("80"), &PayrollPolicy::default());

        assert_eq!(figures.deductions.pagibig, dec("0"));
        assert_eq!(
            figures.final_salary,
            dec("4000") - figures.deductions.philhealth - figures.deductions.sss
        );
    }

    #[test]
    fn test_zero_hours_zero_pay() {
        let figures = compute_salary(dec("0"), dec("100"), dec("80"), &PayrollPolicy::default());

        assert_eq!(figures.base_salary, dec("0"));
        assert_eq!(figures.final_salary, dec("0"));
    }

    #[test]
    fn test_salary_identity_holds() {
        let figures = compute_salary(
            dec("93.25"),
            dec("85.50"),
            dec("88"),
            &PayrollPolicy::default(),
        );

        assert_eq!(
            figures.final_salary,
            figures.base_salary + figures.overtime_pay - figures.deductions.total
        );
    }

    proptest! {
        /// The salary identity holds for any plausible hours/rate/cap mix.
        #[test]
        fn prop_salary_identity(
            hours_minutes in 0i64..20_000,
            rate_cents in 0i64..100_000,
            cap_hours in 1i64..400,
        ) {
            let total_hours = Decimal::new(hours_minutes, 0) / Decimal::new(60, 0);
            let rate = Decimal::new(rate_cents, 2);
            let cap = Decimal::new(cap_hours, 0);

            let figures = compute_salary(total_hours, rate, cap, &PayrollPolicy::default());

            prop_assert_eq!(
                figures.final_salary,
                figures.base_salary + figures.overtime_pay - figures.deductions.total
            );
            prop_assert_eq!(
                figures.deductions.total,
                figures.deductions.philhealth + figures.deductions.sss + figures.deductions.pagibig
            );
        }

        /// Overtime never exceeds total hours, and the split re-adds to the total.
        #[test]
        fn prop_overtime_split_is_partition(
            hours_minutes in 0i64..20_000,
            cap_hours in 1i64..400,
        ) {
            let total_hours = Decimal::new(hours_minutes, 0) / Decimal::new(60, 0);
            let cap = Decimal::new(cap_hours, 0);

            let figures = compute_salary(total_hours, Decimal::new(100, 0), cap, &PayrollPolicy::default());

            prop_assert!(figures.overtime_hours >= Decimal::ZERO);
            prop_assert!(figures.overtime_hours <= total_hours);
            if total_hours > cap {
                prop_assert_eq!(figures.overtime_hours, total_hours - cap);
            } else {
                prop_assert_eq!(figures.overtime_hours, Decimal::ZERO);
            }
        }

        /// Pag-IBIG is exactly the flat amount above the threshold, zero at or below.
        #[test]
        fn prop_pagibig_threshold(base_pesos in 0i64..20_000) {
            // Hours chosen so base salary equals base_pesos at rate 1
            let figures = compute_salary(
                Decimal::new(base_pesos, 0),
                Decimal::ONE,
                Decimal::new(1_000_000, 0),
                &PayrollPolicy::default(),
            );

            if Decimal::new(base_pesos, 0) > Decimal::new(5000, 0) {
                prop_assert_eq!(figures.deductions.pagibig, Decimal::new(100, 0));
            } else {
                prop_assert_eq!(figures.deductions.pagibig, Decimal::ZERO);
            }
        }
    }
}
