//! Payment recording against released payslip items.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PaymentProof, PayslipItem};

use super::PayrollEngine;

impl PayrollEngine {
    /// Records a payment against a released payslip item.
    ///
    /// Attaches the signed acknowledgment reference as a [`PaymentProof`]
    /// and moves the item to `Paid`. The released-state check runs at the
    /// storage layer under its lock, so two payers racing on the same item
    /// resolve to one payment and one conflict.
    ///
    /// # Arguments
    ///
    /// * `payslip_item_id` - The item being paid
    /// * `signature_ref` - Reference to the stored signature artifact
    /// * `paid_by` - The payer who collected the signature
    ///
    /// # Returns
    ///
    /// Returns the paid item, or:
    /// - `Validation` if the signature reference or payer is blank
    /// - `NotFound` if the item does not exist
    /// - `Conflict` if the item is not currently `Released`
    pub fn record_payment(
        &self,
        payslip_item_id: Uuid,
        signature_ref: &str,
        paid_by: &str,
    ) -> EngineResult<PayslipItem> {
        let signature_ref = signature_ref.trim();
        if signature_ref.is_empty() {
            return Err(EngineError::validation(
                "signature reference must not be empty",
            ));
        }
        let paid_by = paid_by.trim();
        if paid_by.is_empty() {
            return Err(EngineError::validation("paid_by must not be empty"));
        }

        let proof = PaymentProof {
            signature_ref: signature_ref.to_string(),
            paid_by: paid_by.to_string(),
            paid_at: Utc::now(),
        };
        let item = self.store.record_payment(payslip_item_id, proof)?;

        info!(
            payslip_item_id = %payslip_item_id,
            employee_id = %item.employee_id,
            paid_by = %paid_by,
            "Payment recorded"
        );
        Ok(item)
    }
}

/// Builds the summary the notification service sends out after a payment
/// is recorded.
pub fn payment_payload(item: &PayslipItem) -> serde_json::Value {
    serde_json::json!({
        "event": "payment_recorded",
        "payslip_id": item.payslip_id,
        "payslip_item_id": item.id,
        "employee_id": item.employee_id,
        "payment_status": item.payment_status,
        "signature_ref": item.proof.as_ref().map(|p| p.signature_ref.as_str()),
        "paid_by": item.paid_by(),
        "paid_at": item.paid_at(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approval::{ApprovalTrack, Decision};
    use crate::config::PayrollPolicy;
    use crate::models::{
        AttendanceRecord, AttendanceStatus, EmployeeProfile, PaymentStatus,
    };
    use crate::store::InMemoryStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// Engine with one item fully approved and released; returns its id.
    fn released_engine() -> (PayrollEngine, Uuid) {
        let store = Arc::new(InMemoryStore::new());
        store
            .seed_employee(EmployeeProfile {
                id: "emp_001".to_string(),
                full_name: "Ana Reyes".to_string(),
                hourly_rate: Decimal::new(100, 0),
            })
            .unwrap();
        let day = make_date("2025-06-02");
        store
            .seed_attendance(AttendanceRecord {
                id: "att_001".to_string(),
                employee_id: "emp_001".to_string(),
                work_date: day,
                check_in: day.and_hms_opt(8, 0, 0).unwrap(),
                check_out: Some(day.and_hms_opt(16, 0, 0).unwrap()),
                status: AttendanceStatus::Present,
            })
            .unwrap();

        let engine = PayrollEngine::new(store, PayrollPolicy::default());
        engine
            .generate_for_period(make_date("2025-06-01"), make_date("2025-06-15"), "hr_admin")
            .unwrap();
        let payslip_id = engine
            .create_payslip(
                "June 2025 first half",
                make_date("2025-06-01"),
                make_date("2025-06-15"),
                "hr_admin",
                None,
            )
            .unwrap();
        engine
            .set_approval(ApprovalTrack::Hr, payslip_id, Decision::Approve, None, "hr_manager")
            .unwrap();
        let outcome = engine
            .set_approval(
                ApprovalTrack::Finance,
                payslip_id,
                Decision::Approve,
                None,
                "finance_head",
            )
            .unwrap();
        (engine, outcome.items[0].id)
    }

    #[test]
    fn test_payment_marks_item_paid_with_proof() {
        let (engine, item_id) = released_engine();

        let paid = engine
            .record_payment(item_id, "signatures/2025-06/emp_001.png", "cashier_01")
            .unwrap();

        assert_eq!(paid.payment_status, PaymentStatus::Paid);
        assert_eq!(paid.paid_by(), Some("cashier_01"));
        assert!(paid.paid_at().is_some());
        assert_eq!(
            paid.proof.as_ref().map(|p| p.signature_ref.as_str()),
            Some("signatures/2025-06/emp_001.png")
        );
    }

    #[test]
    fn test_blank_signature_ref_is_rejected() {
        let (engine, item_id) = released_engine();

        let err = engine.record_payment(item_id, "  ", "cashier_01").unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_blank_payer_is_rejected() {
        let (engine, item_id) = released_engine();

        let err = engine
            .record_payment(item_id, "signatures/emp_001.png", "")
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_second_payment_conflicts() {
        let (engine, item_id) = released_engine();

        engine
            .record_payment(item_id, "signatures/emp_001.png", "cashier_01")
            .unwrap();
        let err = engine
            .record_payment(item_id, "signatures/emp_001_dup.png", "cashier_02")
            .unwrap_err();
        assert_eq!(err.code(), "CONFLICT");
    }

    #[test]
    fn test_unknown_item_is_not_found() {
        let (engine, _item_id) = released_engine();

        let err = engine
            .record_payment(Uuid::new_v4(), "signatures/none.png", "cashier_01")
            .unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_payment_payload_carries_proof_fields() {
        let (engine, item_id) = released_engine();

        let paid = engine
            .record_payment(item_id, "signatures/2025-06/emp_001.png", "cashier_01")
            .unwrap();
        let payload = payment_payload(&paid);

        assert_eq!(payload["event"], "payment_recorded");
        assert_eq!(payload["employee_id"], "emp_001");
        assert_eq!(payload["payment_status"], "paid");
        assert_eq!(payload["signature_ref"], "signatures/2025-06/emp_001.png");
        assert_eq!(payload["paid_by"], "cashier_01");
    }
}
