//! Storage interface for payroll state.
//!
//! The engine talks to persistence through the [`PayrollStore`] trait. The
//! trait is deliberately coarse: every write that must be atomic (a payroll
//! run, batch creation, an approval with its cascade and release, a payment)
//! is a single method, so uniqueness checks and compare-and-swaps happen
//! under the store's own lock rather than in the caller.
//!
//! [`InMemoryStore`] is the bundled implementation, backed by `BTreeMap`
//! tables behind an `RwLock`.

mod memory;

pub use memory::InMemoryStore;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::approval::ApprovalUpdate;
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, EmployeeProfile, PaymentProof, PayrollLineItem, Payslip, PayslipItem,
};

/// Persistence operations the payroll engine needs.
///
/// Read methods return `Ok(None)` / empty vectors for absent rows; the
/// engine decides which absences are errors. Write methods enforce the
/// storage invariants (per-period uniqueness, pending-only approval
/// transitions, released-only payments) under the store's lock and report
/// violations as `Conflict`.
pub trait PayrollStore: Send + Sync {
    /// Looks up an employee profile from the registry.
    fn employee(&self, id: &str) -> EngineResult<Option<EmployeeProfile>>;

    /// Returns attendance records whose work date falls inside the period,
    /// both bounds inclusive.
    fn attendance_in_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Returns the payroll line items generated for exactly this period,
    /// ordered by employee id.
    fn line_items_for_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<PayrollLineItem>>;

    /// Inserts a payroll run's line items, all or nothing.
    ///
    /// Fails with `Conflict`, inserting nothing, if any employee in the
    /// batch already has a line item for the same period. This is the
    /// uniqueness check that makes generation idempotent under concurrency.
    fn insert_line_items(&self, items: Vec<PayrollLineItem>) -> EngineResult<()>;

    /// Looks up a payslip batch by id.
    fn payslip(&self, id: Uuid) -> EngineResult<Option<Payslip>>;

    /// Looks up the payslip covering exactly this period, if one exists.
    fn payslip_for_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Option<Payslip>>;

    /// Returns a batch's items ordered by employee id.
    fn items_for_payslip(&self, payslip_id: Uuid) -> EngineResult<Vec<PayslipItem>>;

    /// Looks up a single payslip item by id.
    fn payslip_item(&self, id: Uuid) -> EngineResult<Option<PayslipItem>>;

    /// Creates a payslip batch with its items in one atomic step, flipping
    /// every covered line item to `Batched`.
    ///
    /// Fails with `Conflict`, writing nothing, if a payslip already covers
    /// the same period.
    fn create_payslip(&self, payslip: Payslip, items: Vec<PayslipItem>) -> EngineResult<()>;

    /// Applies a planned approval decision atomically: re-checks the track
    /// is still `Pending` (compare-and-swap), writes the batch track,
    /// cascades to items, and performs any payment release the update
    /// calls for.
    ///
    /// Returns the updated batch, its items, and how many items the call
    /// released.
    fn apply_approval(
        &self,
        update: &ApprovalUpdate,
    ) -> EngineResult<(Payslip, Vec<PayslipItem>, usize)>;

    /// Records a payment against a released item: attaches the proof and
    /// moves it to `Paid`. Fails with `Conflict` if the item is not
    /// currently `Released`.
    fn record_payment(&self, item_id: Uuid, proof: PaymentProof) -> EngineResult<PayslipItem>;
}
