//! The payroll engine facade.
//!
//! [`PayrollEngine`] is the operation surface the rest of the platform
//! calls: generating payroll for a period, batching it into a payslip,
//! recording approval decisions, and recording payments. The engine wires
//! the pure calculation and approval rules to a [`PayrollStore`] and a
//! [`PayrollPolicy`]; it holds no mutable state of its own, so one engine
//! can be shared across threads.

mod approval;
mod payment;
mod payroll_run;
mod payslip;

pub use payment::payment_payload;

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollLineItem, Payslip, PayslipItem};
use crate::store::PayrollStore;

/// Whether a payroll run computed fresh figures or found the period already
/// generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    /// This call computed and stored the period's line items.
    New,
    /// The period was already generated; the stored rows are returned
    /// unchanged.
    Existing,
}

/// The outcome of a payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPayroll {
    /// The period's line items, ordered by employee id.
    pub records: Vec<PayrollLineItem>,
    /// Whether the rows were computed by this call or found in place.
    pub kind: GenerationKind,
}

/// The outcome of an approval decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalOutcome {
    /// The batch after the decision.
    pub payslip: Payslip,
    /// The batch's items after any cascade and release, ordered by
    /// employee id.
    pub items: Vec<PayslipItem>,
    /// How many items this decision released for payment.
    pub released: usize,
}

impl ApprovalOutcome {
    /// Builds the summary the notification service fans out to the
    /// batch's watchers after a decision.
    pub fn notification_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "event": "payslip_review",
            "payslip_id": self.payslip.id,
            "title": self.payslip.title,
            "period_start": self.payslip.period_start,
            "period_end": self.payslip.period_end,
            "hr_status": self.payslip.hr.status,
            "finance_status": self.payslip.finance.status,
            "ceo_status": self.payslip.ceo.status,
            "items": self.items.len(),
            "released_items": self.released,
        })
    }
}

/// Payroll computation and approval pipeline over a shared store.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use chrono::NaiveDate;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::engine::{GenerationKind, PayrollEngine};
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus, EmployeeProfile};
/// use payroll_engine::store::InMemoryStore;
/// use rust_decimal::Decimal;
///
/// let store = Arc::new(InMemoryStore::new());
/// store.seed_employee(EmployeeProfile {
///     id: "emp_001".to_string(),
///     full_name: "Ana Reyes".to_string(),
///     hourly_rate: Decimal::new(100, 0),
/// }).unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// store.seed_attendance(AttendanceRecord {
///     id: "att_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     work_date: date,
///     check_in: date.and_hms_opt(8, 0, 0).unwrap(),
///     check_out: Some(date.and_hms_opt(16, 0, 0).unwrap()),
///     status: AttendanceStatus::Present,
/// }).unwrap();
///
/// let engine = PayrollEngine::new(store, PayrollPolicy::default());
/// let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
///
/// let generated = engine.generate_for_period(start, end, "hr_admin").unwrap();
/// assert_eq!(generated.kind, GenerationKind::New);
/// assert_eq!(generated.records.len(), 1);
/// ```
pub struct PayrollEngine {
    store: Arc<dyn PayrollStore>,
    policy: PayrollPolicy,
}

impl PayrollEngine {
    /// Creates an engine over the given store and policy.
    pub fn new(store: Arc<dyn PayrollStore>, policy: PayrollPolicy) -> Self {
        Self { store, policy }
    }

    /// Returns the policy the engine computes with.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Returns the line items generated for exactly this period, ordered
    /// by employee id. Empty if the period has not been generated.
    pub fn payroll_for_period(
        &self,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> EngineResult<Vec<PayrollLineItem>> {
        self.store.line_items_for_period(period_start, period_end)
    }

    /// Returns a payslip batch with its items, ordered by employee id.
    ///
    /// # Returns
    ///
    /// Returns `NotFound` if no batch has this id.
    pub fn payslip_detail(
        &self,
        payslip_id: Uuid,
    ) -> EngineResult<(Payslip, Vec<PayslipItem>)> {
        let payslip = self
            .store
            .payslip(payslip_id)?
            .ok_or_else(|| EngineError::not_found("payslip", payslip_id))?;
        let items = self.store.items_for_payslip(payslip_id)?;
        Ok((payslip, items))
    }
}
