//! Configuration types for payroll policy.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from the payroll policy YAML file. The defaults carry the
//! statutory values the engine ships with.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Default normal working hours per period day.
pub const DEFAULT_DAILY_NORMAL_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default overtime premium multiplier (time and a half).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default PhilHealth contribution rate (2.25% of base salary).
pub const DEFAULT_PHILHEALTH_RATE: Decimal = Decimal::from_parts(225, 0, 0, false, 4);

/// Default SSS contribution rate (5.63% of base salary).
pub const DEFAULT_SSS_RATE: Decimal = Decimal::from_parts(563, 0, 0, false, 4);

/// Default flat Pag-IBIG contribution.
pub const DEFAULT_PAGIBIG_FLAT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Default base-salary threshold above which Pag-IBIG is withheld.
pub const DEFAULT_PAGIBIG_THRESHOLD: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Overtime parameters: how the normal-hours cap is built and how the
/// premium is priced.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimePolicy {
    /// Normal working hours credited per period day.
    pub daily_normal_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            daily_normal_hours: DEFAULT_DAILY_NORMAL_HOURS,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

/// Statutory deduction parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionPolicy {
    /// PhilHealth contribution rate applied to base salary.
    pub philhealth_rate: Decimal,
    /// SSS contribution rate applied to base salary.
    pub sss_rate: Decimal,
    /// Flat Pag-IBIG contribution amount.
    pub pagibig_flat: Decimal,
    /// Base-salary threshold above which Pag-IBIG is withheld.
    pub pagibig_threshold: Decimal,
}

impl Default for DeductionPolicy {
    fn default() -> Self {
        Self {
            philhealth_rate: DEFAULT_PHILHEALTH_RATE,
            sss_rate: DEFAULT_SSS_RATE,
            pagibig_flat: DEFAULT_PAGIBIG_FLAT,
            pagibig_threshold: DEFAULT_PAGIBIG_THRESHOLD,
        }
    }
}

/// The complete payroll policy: overtime plus statutory deductions.
///
/// `PayrollPolicy::default()` carries the statutory values; deployments
/// override them through the policy YAML file loaded by
/// [`load_policy`](crate::config::load_policy).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollPolicy {
    /// Overtime cap and premium parameters.
    pub overtime: OvertimePolicy,
    /// Statutory deduction rates and thresholds.
    pub deductions: DeductionPolicy,
}

impl PayrollPolicy {
    /// Checks the policy values for internal sanity.
    ///
    /// Rejects non-positive daily hours, a premium multiplier below 1, and
    /// negative or above-100% deduction parameters.
    pub fn validate(&self) -> EngineResult<()> {
        if self.overtime.daily_normal_hours <= Decimal::ZERO {
            return Err(EngineError::validation(
                "policy daily_normal_hours must be positive",
            ));
        }
        if self.overtime.overtime_multiplier < Decimal::ONE {
            return Err(EngineError::validation(
                "policy overtime_multiplier must be at least 1",
            ));
        }
        for (name, rate) in [
            ("philhealth_rate", self.deductions.philhealth_rate),
            ("sss_rate", self.deductions.sss_rate),
        ] {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(EngineError::validation(format!(
                    "policy {} must be in [0, 1)",
                    name
                )));
            }
        }
        if self.deductions.pagibig_flat < Decimal::ZERO {
            return Err(EngineError::validation(
                "policy pagibig_flat must not be negative",
            ));
        }
        if self.deductions.pagibig_threshold < Decimal::ZERO {
            return Err(EngineError::validation(
                "policy pagibig_threshold must not be negative",
            ));
        }
        Ok(())
    }
}
