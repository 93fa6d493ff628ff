//! Approval decisions on payslip batches.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::approval::{plan_decision, ApprovalTrack, Decision};
use crate::error::{EngineError, EngineResult};

use super::{ApprovalOutcome, PayrollEngine};

impl PayrollEngine {
    /// Records an approval decision on one track of a payslip batch.
    ///
    /// The decision is validated against a snapshot of the batch (ordering
    /// gates, terminal tracks, remark requirements), then applied
    /// atomically: the batch track moves, HR and Finance decisions cascade
    /// to every item, and a Finance approval additionally releases every
    /// eligible item for payment.
    ///
    /// # Arguments
    ///
    /// * `track` - Which review track the decision moves
    /// * `payslip_id` - The batch being decided
    /// * `decision` - Approve or reject
    /// * `remarks` - Free-form remarks; required when rejecting
    /// * `decided_by` - The approver recording the decision
    ///
    /// # Returns
    ///
    /// Returns the batch and items after the decision, or:
    /// - `Validation` if `decided_by` is blank or a rejection has no remark
    /// - `NotFound` if the batch does not exist
    /// - `Conflict` if the track is already decided or an ordering gate is
    ///   not satisfied
    pub fn set_approval(
        &self,
        track: ApprovalTrack,
        payslip_id: Uuid,
        decision: Decision,
        remarks: Option<&str>,
        decided_by: &str,
    ) -> EngineResult<ApprovalOutcome> {
        let decided_by = decided_by.trim();
        if decided_by.is_empty() {
            return Err(EngineError::validation("decided_by must not be empty"));
        }

        let snapshot = self
            .store
            .payslip(payslip_id)?
            .ok_or_else(|| EngineError::not_found("payslip", payslip_id))?;
        let update = plan_decision(&snapshot, track, decision, remarks, decided_by, Utc::now())?;
        let (payslip, items, released) = self.store.apply_approval(&update)?;

        info!(
            payslip_id = %payslip_id,
            track = track.as_str(),
            status = ?update.new_status,
            decided_by = %decided_by,
            released = released,
            "Approval decision recorded"
        );
        Ok(ApprovalOutcome {
            payslip,
            items,
            released,
        })
    }
}
