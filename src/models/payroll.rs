//! Payroll line item model.
//!
//! This module contains the [`PayrollLineItem`] type: one employee's
//! computed monetary figures for one pay period, produced exactly once per
//! (employee, period) by payroll generation.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a generated payroll line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    /// Generated and waiting to be picked up by a payslip batch.
    Pending,
    /// Included in a payslip; the review pipeline owns it from here.
    Batched,
}

/// One employee's computed pay for one period.
///
/// The monetary fields are immutable once the row exists; only `status`
/// moves, from `Pending` to `Batched` when a payslip picks the row up.
/// At most one line item exists per (employee, period start, period end);
/// generation is idempotent and the storage layer enforces the uniqueness.
///
/// The figures satisfy
/// `final_salary == base_salary + overtime_pay - total_deductions` with
/// `total_deductions == philhealth + sss + pagibig`, exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollLineItem {
    /// Identifier minted at generation time.
    pub id: Uuid,
    /// The employee the figures belong to.
    pub employee_id: String,
    /// First day of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub period_end: NaiveDate,
    /// Total hours worked over qualifying attendance in the period.
    pub total_hours: Decimal,
    /// Pay for all worked hours at the plain hourly rate.
    pub base_salary: Decimal,
    /// Hours worked beyond the period's normal-hours cap.
    pub overtime_hours: Decimal,
    /// Premium paid on overtime hours.
    pub overtime_pay: Decimal,
    /// PhilHealth contribution withheld from base salary.
    pub philhealth: Decimal,
    /// SSS contribution withheld from base salary.
    pub sss: Decimal,
    /// Pag-IBIG contribution withheld when base salary clears the threshold.
    pub pagibig: Decimal,
    /// Sum of the three statutory deductions.
    pub total_deductions: Decimal,
    /// Net pay: base salary plus overtime pay minus total deductions.
    pub final_salary: Decimal,
    /// Whether the row is still waiting for a payslip batch.
    pub status: GenerationStatus,
    /// The HR actor who ran the generation.
    pub generated_by: String,
    /// When the generation ran.
    pub generated_at: DateTime<Utc>,
}

impl PayrollLineItem {
    /// Returns true when the stored figures satisfy the salary identity:
    /// deductions add up and net pay equals base plus overtime minus
    /// deductions.
    pub fn figures_consistent(&self) -> bool {
        self.total_deductions == self.philhealth + self.sss + self.pagibig
            && self.final_salary == self.base_salary + self.overtime_pay - self.total_deductions
    }
}
