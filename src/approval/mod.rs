//! Approval pipeline rules.
//!
//! This module holds the pure decision logic for the three-track review
//! pipeline: which track a decision touches, when a transition is lawful,
//! and when payment is released or recordable. Nothing here talks to
//! storage; the engine snapshots a batch, plans the decision with these
//! rules, and hands the resulting update to the store to apply atomically.

mod payment;
mod track;
mod transition;

pub use payment::{can_release, ensure_payable};
pub use track::{ApprovalTrack, Decision};
pub use transition::{plan_decision, ApprovalUpdate};
