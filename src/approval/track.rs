//! Approval track and decision vocabulary.
//!
//! The review pipeline runs three independent tracks over every payslip.
//! [`ApprovalTrack`] names them and knows which [`TrackState`] field each
//! one owns on the batch and on its items.

use serde::{Deserialize, Serialize};

use crate::models::{ApprovalStatus, Payslip, PayslipItem, TrackState};

/// One of the three review tracks a payslip moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalTrack {
    /// Human-resources review; the first gate.
    Hr,
    /// Finance review; approval here releases payment.
    Finance,
    /// Executive oversight; recorded after Finance has approved.
    Executive,
}

impl ApprovalTrack {
    /// Returns the track name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::Finance => "finance",
            Self::Executive => "executive",
        }
    }

    /// Whether a decision on this track is copied onto every item of the
    /// batch. Executive review applies to the batch only.
    pub fn cascades_to_items(self) -> bool {
        !matches!(self, Self::Executive)
    }

    /// Returns this track's state on the batch.
    pub fn state_of<'a>(self, payslip: &'a Payslip) -> &'a TrackState {
        match self {
            Self::Hr => &payslip.hr,
            Self::Finance => &payslip.finance,
            Self::Executive => &payslip.ceo,
        }
    }

    /// Returns this track's state on the batch, mutably.
    pub fn state_of_mut<'a>(self, payslip: &'a mut Payslip) -> &'a mut TrackState {
        match self {
            Self::Hr => &mut payslip.hr,
            Self::Finance => &mut payslip.finance,
            Self::Executive => &mut payslip.ceo,
        }
    }

    /// Returns this track's state on an item, or `None` for the executive
    /// track, which items do not carry.
    pub fn item_state_of<'a>(self, item: &'a PayslipItem) -> Option<&'a TrackState> {
        match self {
            Self::Hr => Some(&item.hr),
            Self::Finance => Some(&item.finance),
            Self::Executive => None,
        }
    }

    /// Returns this track's state on an item, mutably.
    pub fn item_state_of_mut<'a>(self, item: &'a mut PayslipItem) -> Option<&'a mut TrackState> {
        match self {
            Self::Hr => Some(&mut item.hr),
            Self::Finance => Some(&mut item.finance),
            Self::Executive => None,
        }
    }
}

/// The decision an approver records on a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Move the track to `Approved`.
    Approve,
    /// Move the track to `Rejected`; requires a remark.
    Reject,
}

impl Decision {
    /// The status this decision moves the track to.
    pub fn target_status(self) -> ApprovalStatus {
        match self {
            Self::Approve => ApprovalStatus::Approved,
            Self::Reject => ApprovalStatus::Rejected,
        }
    }
}
