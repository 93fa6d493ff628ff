//! Approval transition rules.
//!
//! [`plan_decision`] checks a requested decision against the current batch
//! state and produces an [`ApprovalUpdate`] describing exactly what the
//! storage layer must apply. The rules live here as pure functions so they
//! can be tested without a store.
//!
//! The rules are:
//! - a track can only be decided while it is `Pending`;
//! - rejecting any track requires a non-empty remark;
//! - Finance can approve only after HR has approved (Finance may reject at
//!   any time);
//! - the executive track is reviewed, either way, only after Finance has
//!   approved, and its outcome does not hold back payment release.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{ApprovalStatus, Payslip};

use super::track::{ApprovalTrack, Decision};

/// A validated, ready-to-apply approval decision.
///
/// Produced by [`plan_decision`] from a snapshot of the batch; the storage
/// layer re-checks under its lock that the track is still `Pending` before
/// applying it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalUpdate {
    /// The batch being decided.
    pub payslip_id: Uuid,
    /// The track the decision moves.
    pub track: ApprovalTrack,
    /// The status the track moves to.
    pub new_status: ApprovalStatus,
    /// Trimmed remarks; always present on a rejection.
    pub remarks: Option<String>,
    /// The actor who decided.
    pub decided_by: String,
    /// When the decision was made.
    pub decided_at: DateTime<Utc>,
    /// Whether the decision is copied onto every item of the batch.
    pub cascade_items: bool,
    /// Whether applying the decision also releases payment on the items.
    pub release_on_approve: bool,
}

/// Validates a decision against the current batch state.
///
/// # Arguments
///
/// * `payslip` - A snapshot of the batch being decided
/// * `track` - Which review track the decision moves
/// * `decision` - Approve or reject
/// * `remarks` - Free-form remarks; required when rejecting
/// * `decided_by` - The approver recording the decision
/// * `decided_at` - The decision timestamp
///
/// # Returns
///
/// Returns the [`ApprovalUpdate`] to apply, or:
/// - `Conflict` if the track is already decided, if Finance tries to
///   approve before HR has, or if the executive track is reviewed before
///   Finance has approved
/// - `Validation` if a rejection carries no remark
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use payroll_engine::approval::{plan_decision, ApprovalTrack, Decision};
/// use payroll_engine::models::{ApprovalStatus, Payslip, TrackState};
/// use uuid::Uuid;
///
/// let payslip = Payslip {
///     id: Uuid::new_v4(),
///     title: "June 2025".to_string(),
///     period_start: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     period_end: chrono::NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
///     created_by: "hr_admin".to_string(),
///     created_at: Utc::now(),
///     remarks: None,
///     hr: TrackState::pending(),
///     finance: TrackState::pending(),
///     ceo: TrackState::pending(),
/// };
///
/// let update = plan_decision(
///     &payslip,
///     ApprovalTrack::Hr,
///     Decision::Approve,
///     None,
///     "hr_admin",
///     Utc::now(),
/// ).unwrap();
///
/// assert_eq!(update.new_status, ApprovalStatus::Approved);
/// assert!(update.cascade_items);
/// ```
pub fn plan_decision(
    payslip: &Payslip,
    track: ApprovalTrack,
    decision: Decision,
    remarks: Option<&str>,
    decided_by: &str,
    decided_at: DateTime<Utc>,
) -> EngineResult<ApprovalUpdate> {
    let current = track.state_of(payslip);
    if current.status.is_terminal() {
        return Err(EngineError::conflict(format!(
            "{} review of payslip {} has already been decided",
            track.as_str(),
            payslip.id
        )));
    }

    let remarks = remarks.map(str::trim).filter(|r| !r.is_empty());
    if decision == Decision::Reject && remarks.is_none() {
        return Err(EngineError::validation(format!(
            "rejecting the {} review requires a remark",
            track.as_str()
        )));
    }

    match track {
        ApprovalTrack::Finance if decision == Decision::Approve => {
            if !payslip.hr.status.is_approved() {
                return Err(EngineError::conflict(format!(
                    "finance cannot approve payslip {} before hr has approved it",
                    payslip.id
                )));
            }
        }
        ApprovalTrack::Executive => {
            if !payslip.finance.status.is_approved() {
                return Err(EngineError::conflict(format!(
                    "executive review of payslip {} requires finance approval first",
                    payslip.id
                )));
            }
        }
        _ => {}
    }

    Ok(ApprovalUpdate {
        payslip_id: payslip.id,
        track,
        new_status: decision.target_status(),
        remarks: remarks.map(str::to_string),
        decided_by: decided_by.to_string(),
        decided_at,
        cascade_items: track.cascades_to_items(),
        release_on_approve: track == ApprovalTrack::Finance && decision == Decision::Approve,
    })
}
