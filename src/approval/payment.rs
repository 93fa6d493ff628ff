//! Release and payment rules.
//!
//! Payment release is not its own actor action: it rides the Finance
//! approval. These predicates decide which items a Finance approval
//! releases and whether a released item can accept a payment.

use crate::error::{EngineError, EngineResult};
use crate::models::{PaymentStatus, PayslipItem};

/// Whether a Finance approval releases this item for payment.
///
/// True when the item's finance track is approved and its payment is still
/// `Pending`. Items already `Released` or `Paid` are left untouched, which
/// makes release idempotent.
pub fn can_release(item: &PayslipItem) -> bool {
    item.finance.status.is_approved() && item.payment_status == PaymentStatus::Pending
}

/// Checks that a payment can be recorded against this item.
///
/// Only `Released` items accept a payment; anything else is a conflict.
/// `Paid` is terminal, so a second payment against the same item is
/// rejected here.
pub fn ensure_payable(item: &PayslipItem) -> EngineResult<()> {
    match item.payment_status {
        PaymentStatus::Released => Ok(()),
        PaymentStatus::Pending => Err(EngineError::conflict(format!(
            "payslip item {} has not been released for payment",
            item.id
        ))),
        PaymentStatus::Paid => Err(EngineError::conflict(format!(
            "payslip item {} is already paid",
            item.id
        ))),
    }
}
