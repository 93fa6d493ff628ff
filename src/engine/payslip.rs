//! Payslip batch creation.

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PaymentStatus, Payslip, PayslipItem, TrackState};

use super::PayrollEngine;

impl PayrollEngine {
    /// Batches a generated period into a payslip for review.
    ///
    /// Creates the batch document with all three tracks pending, one item
    /// per line item of the period, and flips the covered line items to
    /// `Batched`, all in one atomic storage step.
    ///
    /// # Arguments
    ///
    /// * `title` - Human-readable batch title
    /// * `period_start` - First day of the covered period (inclusive)
    /// * `period_end` - Last day of the covered period (inclusive)
    /// * `created_by` - The HR actor creating the batch
    /// * `remarks` - Optional free-form remarks
    ///
    /// # Returns
    ///
    /// Returns the new payslip's id, or:
    /// - `Validation` if the title or actor is blank or the period is
    ///   inverted
    /// - `NotFound` if the period has no generated line items
    /// - `Conflict` if a payslip already covers the period
    pub fn create_payslip(
        &self,
        title: &str,
        period_start: NaiveDate,
        period_end: NaiveDate,
        created_by: &str,
        remarks: Option<&str>,
    ) -> EngineResult<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return Err(EngineError::validation("payslip title must not be empty"));
        }
        let created_by = created_by.trim();
        if created_by.is_empty() {
            return Err(EngineError::validation("created_by must not be empty"));
        }
        if period_end < period_start {
            return Err(EngineError::validation(format!(
                "period end {} is before period start {}",
                period_end, period_start
            )));
        }

        let line_items = self.store.line_items_for_period(period_start, period_end)?;
        if line_items.is_empty() {
            return Err(EngineError::not_found(
                "generated payroll for period",
                format!("{} to {}", period_start, period_end),
            ));
        }

        let payslip_id = Uuid::new_v4();
        let payslip = Payslip {
            id: payslip_id,
            title: title.to_string(),
            period_start,
            period_end,
            created_by: created_by.to_string(),
            created_at: Utc::now(),
            remarks: remarks
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            hr: TrackState::pending(),
            finance: TrackState::pending(),
            ceo: TrackState::pending(),
        };
        let items: Vec<PayslipItem> = line_items
            .iter()
            .map(|line| PayslipItem {
                id: Uuid::new_v4(),
                payslip_id,
                line_item_id: line.id,
                employee_id: line.employee_id.clone(),
                hr: TrackState::pending(),
                finance: TrackState::pending(),
                payment_status: PaymentStatus::Pending,
                release_remarks: None,
                released_by: None,
                released_at: None,
                proof: None,
            })
            .collect();
        let item_count = items.len();

        self.store.create_payslip(payslip, items)?;
        info!(
            payslip_id = %payslip_id,
            period_start = %period_start,
            period_end = %period_end,
            items = item_count,
            created_by = %created_by,
            "Payslip created"
        );
        Ok(payslip_id)
    }
}
