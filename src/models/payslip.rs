//! Payslip batch and item models.
//!
//! This module contains the [`Payslip`] batch document, its per-employee
//! [`PayslipItem`] rows, the approval/payment status enums they carry, and
//! the [`PaymentProof`] attached when an item is paid.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of one approval track (HR, Finance, or executive).
///
/// `Pending` is the only state a decision can be made from; `Approved` and
/// `Rejected` are terminal. A rejected batch re-enters review through
/// regeneration, never through another transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; terminal.
    Approved,
    /// Rejected with remarks; terminal.
    Rejected,
}

impl ApprovalStatus {
    /// Returns true once a decision has been recorded.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns true for `Approved`.
    pub fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Payment progress of a payslip item.
///
/// The only lawful walk is `Pending → Released → Paid`; nothing is skipped
/// or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Not yet authorized for disbursement.
    Pending,
    /// Authorized by Finance, awaiting a signed acknowledgment.
    Released,
    /// Acknowledged and disbursed; terminal.
    Paid,
}

/// The decision state of one approval track on a batch or item.
///
/// A fresh track is `Pending` with no remarks, approver, or timestamp; a
/// decision fills all three in one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackState {
    /// Current status of the track.
    pub status: ApprovalStatus,
    /// Remarks recorded with the decision; required when rejecting.
    pub remarks: Option<String>,
    /// The actor who decided.
    pub decided_by: Option<String>,
    /// When the decision was made.
    pub decided_at: Option<DateTime<Utc>>,
}

impl TrackState {
    /// A track with no decision yet.
    pub fn pending() -> Self {
        Self {
            status: ApprovalStatus::Pending,
            remarks: None,
            decided_by: None,
            decided_at: None,
        }
    }
}

impl Default for TrackState {
    fn default() -> Self {
        Self::pending()
    }
}

/// The reviewable batch document grouping all employees' pay for one period.
///
/// Created once per period by HR with every track `Pending`; afterwards only
/// approval actions mutate it, each moving exactly one track forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Identifier minted at creation time.
    pub id: Uuid,
    /// Human-readable batch title (e.g. "June 2025 first half").
    pub title: String,
    /// First day of the covered pay period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the covered pay period (inclusive).
    pub period_end: NaiveDate,
    /// The HR actor who created the batch.
    pub created_by: String,
    /// When the batch was created.
    pub created_at: DateTime<Utc>,
    /// Free-form remarks recorded at creation.
    pub remarks: Option<String>,
    /// The HR review track.
    pub hr: TrackState,
    /// The Finance review track; approval here releases payment.
    pub finance: TrackState,
    /// The executive oversight track, reviewed after Finance has approved.
    pub ceo: TrackState,
}

/// One employee's line within a payslip.
///
/// Items mirror the batch's HR and Finance decisions (cascaded in the same
/// atomic step) and additionally carry the item-level payment state. There
/// is no item-level executive track; executive review applies to the batch
/// as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipItem {
    /// Identifier minted when the batch is created.
    pub id: Uuid,
    /// The batch this item belongs to.
    pub payslip_id: Uuid,
    /// The payroll line item whose figures this item presents for review.
    pub line_item_id: Uuid,
    /// The employee the line belongs to.
    pub employee_id: String,
    /// The item's HR track, mirroring the batch decision.
    pub hr: TrackState,
    /// The item's Finance track, mirroring the batch decision.
    pub finance: TrackState,
    /// Payment progress of this item.
    pub payment_status: PaymentStatus,
    /// Remarks stamped when the item was released.
    pub release_remarks: Option<String>,
    /// The Finance actor whose approval released the item.
    pub released_by: Option<String>,
    /// When the item was released.
    pub released_at: Option<DateTime<Utc>>,
    /// The signed acknowledgment attached at the `Paid` transition.
    pub proof: Option<PaymentProof>,
}

impl PayslipItem {
    /// Returns the payer recorded on the attached proof, if the item is paid.
    pub fn paid_by(&self) -> Option<&str> {
        self.proof.as_ref().map(|p| p.paid_by.as_str())
    }

    /// Returns when the item was paid, if it is paid.
    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.proof.as_ref().map(|p| p.paid_at)
    }
}

/// The signed acknowledgment captured when a released item is paid.
///
/// Created once at the `Paid` transition and never changed afterwards. The
/// signature itself lives with the file-storage collaborator; this core
/// keeps only the artifact reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentProof {
    /// Reference to the stored signature artifact.
    pub signature_ref: String,
    /// The payer who collected the signature.
    pub paid_by: String,
    /// When the payment was recorded.
    pub paid_at: DateTime<Utc>,
}
