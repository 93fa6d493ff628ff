//! In-memory store implementation.
//!
//! Backs the [`PayrollStore`] trait with `BTreeMap` tables behind a single
//! `RwLock`. Every multi-row write takes the write lock once and validates
//! before mutating, so a failed call leaves the tables untouched.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::approval::{can_release, ensure_payable, ApprovalUpdate};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, EmployeeProfile, GenerationStatus, PaymentProof, PaymentStatus,
    PayrollLineItem, Payslip, PayslipItem, TrackState,
};

use super::PayrollStore;

#[derive(Debug, Default)]
struct StoreInner {
    employees: BTreeMap<String, EmployeeProfile>,
    attendance: BTreeMap<String, AttendanceRecord>,
    line_items: BTreeMap<Uuid, PayrollLineItem>,
    payslips: BTreeMap<Uuid, Payslip>,
    payslip_items: BTreeMap<Uuid, PayslipItem>,
}

/// Thread-safe in-memory [`PayrollStore`].
///
/// The employee registry and attendance tables are owned by other parts of
/// the platform; `seed_employee` and `seed_attendance` stand in for their
/// writes so the engine can be exercised without them.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeProfile;
/// use payroll_engine::store::{InMemoryStore, PayrollStore};
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new();
/// store.seed_employee(EmployeeProfile {
///     id: "emp_001".to_string(),
///     full_name: "Ana Reyes".to_string(),
///     hourly_rate: Decimal::new(100, 0),
/// }).unwrap();
///
/// let profile = store.employee("emp_001").unwrap().unwrap();
/// assert_eq!(profile.full_name, "Ana Reyes");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an employee profile, keyed by employee id.
    pub fn seed_employee(&self, profile: EmployeeProfile) -> EngineResult<()> {
        let mut inner = self.write_inner()?;
        inner.employees.insert(profile.id.clone(), profile);
        Ok(())
    }

    /// Inserts or replaces an attendance record, keyed by record id.
    pub fn seed_attendance(&self, record: AttendanceRecord) -> EngineResult<()> {
        let mut inner = self.write_inner()?;
        inner.attendance.insert(record.id.clone(), record);
        Ok(())
    }

    fn read_inner(&self) -> EngineResult<RwLockReadGuard<'_, StoreInner>> {
        self.inner
            .read()
            .map_err(|_| EngineError::persistence("store lock poisoned"))
    }

    fn write_inner(&self) -> EngineResult<RwLockWriteGuard<'_, StoreInner>> {
        self.inner
            .write()
            .map_err(|_| EngineError::persistence("store lock poisoned"))
    }
}

fn decided_state(update: &ApprovalUpdate) -> TrackState {
    TrackState {
        status: update.new_status,
        remarks: update.remarks.clone(),
        decided_by: Some(update.decided_by.clone()),
        decided_at: Some(update.decided_at),
    }
}

impl PayrollStore for InMemoryStore {
    fn employee(&self, id: &str) -> EngineResult<Option<EmployeeProfile>> {
        let inner = self.read_inner()?;
        Ok(inner.employees.get(id).cloned())
    }

    fn attendance_in_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let inner = self.read_inner()?;
        let mut records: Vec<AttendanceRecord> = inner
            .attendance
            .values()
            .filter(|r| r.work_date >= start && r.work_date <= end)
            .cloned()
            .collect();
        records.sort_by(|a, b| {
            (&a.employee_id, a.work_date, &a.id).cmp(&(&b.employee_id, b.work_date, &b.id))
        });
        Ok(records)
    }

    fn line_items_for_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<PayrollLineItem>> {
        let inner = self.read_inner()?;
        let mut items: Vec<PayrollLineItem> = inner
            .line_items
            .values()
            .filter(|i| i.period_start == start && i.period_end == end)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        Ok(items)
    }

    fn insert_line_items(&self, items: Vec<PayrollLineItem>) -> EngineResult<()> {
        let mut inner = self.write_inner()?;

        // Validate the whole batch before touching the table.
        for item in &items {
            let duplicate = inner.line_items.values().any(|existing| {
                existing.employee_id == item.employee_id
                    && existing.period_start == item.period_start
                    && existing.period_end == item.period_end
            });
            if duplicate {
                return Err(EngineError::conflict(format!(
                    "payroll for employee {} already generated for {} to {}",
                    item.employee_id, item.period_start, item.period_end
                )));
            }
        }

        for item in items {
            inner.line_items.insert(item.id, item);
        }
        Ok(())
    }

    fn payslip(&self, id: Uuid) -> EngineResult<Option<Payslip>> {
        let inner = self.read_inner()?;
        Ok(inner.payslips.get(&id).cloned())
    }

    fn payslip_for_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Option<Payslip>> {
        let inner = self.read_inner()?;
        Ok(inner
            .payslips
            .values()
            .find(|p| p.period_start == start && p.period_end == end)
            .cloned())
    }

    fn items_for_payslip(&self, payslip_id: Uuid) -> EngineResult<Vec<PayslipItem>> {
        let inner = self.read_inner()?;
        let mut items: Vec<PayslipItem> = inner
            .payslip_items
            .values()
            .filter(|i| i.payslip_id == payslip_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        Ok(items)
    }

    fn payslip_item(&self, id: Uuid) -> EngineResult<Option<PayslipItem>> {
        let inner = self.read_inner()?;
        Ok(inner.payslip_items.get(&id).cloned())
    }

    fn create_payslip(&self, payslip: Payslip, items: Vec<PayslipItem>) -> EngineResult<()> {
        let mut inner = self.write_inner()?;

        let duplicate = inner
            .payslips
            .values()
            .any(|p| p.period_start == payslip.period_start && p.period_end == payslip.period_end);
        if duplicate {
            return Err(EngineError::conflict(format!(
                "a payslip already covers {} to {}",
                payslip.period_start, payslip.period_end
            )));
        }
        for item in &items {
            if !inner.line_items.contains_key(&item.line_item_id) {
                return Err(EngineError::not_found(
                    "payroll line item",
                    item.line_item_id,
                ));
            }
        }

        for item in &items {
            if let Some(line) = inner.line_items.get_mut(&item.line_item_id) {
                line.status = GenerationStatus::Batched;
            }
        }
        for item in items {
            inner.payslip_items.insert(item.id, item);
        }
        inner.payslips.insert(payslip.id, payslip);
        Ok(())
    }

    fn apply_approval(
        &self,
        update: &ApprovalUpdate,
    ) -> EngineResult<(Payslip, Vec<PayslipItem>, usize)> {
        let mut inner = self.write_inner()?;

        let payslip = inner
            .payslips
            .get_mut(&update.payslip_id)
            .ok_or_else(|| EngineError::not_found("payslip", update.payslip_id))?;

        // Compare-and-swap: the planned decision is only valid while the
        // track is still pending.
        if update.track.state_of(payslip).status.is_terminal() {
            return Err(EngineError::conflict(format!(
                "{} review of payslip {} has already been decided",
                update.track.as_str(),
                update.payslip_id
            )));
        }

        *update.track.state_of_mut(payslip) = decided_state(update);
        let updated_payslip = payslip.clone();

        let mut released = 0usize;
        let mut items: Vec<PayslipItem> = Vec::new();
        for item in inner
            .payslip_items
            .values_mut()
            .filter(|i| i.payslip_id == update.payslip_id)
        {
            if update.cascade_items {
                if let Some(track) = update.track.item_state_of_mut(item) {
                    *track = decided_state(update);
                }
            }
            if update.release_on_approve && can_release(item) {
                item.payment_status = PaymentStatus::Released;
                item.release_remarks = update.remarks.clone();
                item.released_by = Some(update.decided_by.clone());
                item.released_at = Some(update.decided_at);
                released += 1;
            }
            items.push(item.clone());
        }
        items.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));

        Ok((updated_payslip, items, released))
    }

    fn record_payment(&self, item_id: Uuid, proof: PaymentProof) -> EngineResult<PayslipItem> {
        let mut inner = self.write_inner()?;

        let item = inner
            .payslip_items
            .get_mut(&item_id)
            .ok_or_else(|| EngineError::not_found("payslip item", item_id))?;
        ensure_payable(item)?;

        item.payment_status = PaymentStatus::Paid;
        item.proof = Some(proof);
        Ok(item.clone())
    }
}
