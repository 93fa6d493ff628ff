//! Payroll generation for a pay period.

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_hours, compute_salary, normal_hours_cap};
use crate::error::{EngineError, EngineResult};
use crate::models::{GenerationStatus, PayrollLineItem};

use super::{GeneratedPayroll, GenerationKind, PayrollEngine};

impl PayrollEngine {
    /// Generates payroll line items for every employee with qualifying
    /// attendance in the period.
    ///
    /// Generation is idempotent per period: if line items already exist for
    /// exactly this period they are returned unchanged with
    /// [`GenerationKind::Existing`], and a concurrent run that loses the
    /// storage uniqueness race resolves the same way by re-reading the
    /// winner's rows.
    ///
    /// # Arguments
    ///
    /// * `period_start` - First day of the pay period (inclusive)
    /// * `period_end` - Last day of the pay period (inclusive)
    /// * `generated_by` - The HR actor running payroll
    ///
    /// # Returns
    ///
    /// Returns the period's line items, or:
    /// - `Validation` if the period is inverted, `generated_by` is blank,
    ///   or no qualifying attendance exists in range
    /// - `NotFound` if an attendance record names an employee missing from
    ///   the registry
    pub fn generate_for_period(
        &self,
        period_start: NaiveDate,
        period_end: NaiveDate,
        generated_by: &str,
    ) -> EngineResult<GeneratedPayroll> {
        if period_end < period_start {
            return Err(EngineError::validation(format!(
                "period end {} is before period start {}",
                period_end, period_start
            )));
        }
        let generated_by = generated_by.trim();
        if generated_by.is_empty() {
            return Err(EngineError::validation("generated_by must not be empty"));
        }

        info!(
            period_start = %period_start,
            period_end = %period_end,
            generated_by = %generated_by,
            "Generating payroll for period"
        );

        let existing = self.store.line_items_for_period(period_start, period_end)?;
        if !existing.is_empty() {
            info!(
                period_start = %period_start,
                period_end = %period_end,
                records = existing.len(),
                "Period already generated, returning stored line items"
            );
            return Ok(GeneratedPayroll {
                records: existing,
                kind: GenerationKind::Existing,
            });
        }

        let attendance = self.store.attendance_in_period(period_start, period_end)?;
        let rollup = aggregate_hours(&attendance)?;
        if rollup.open_skipped > 0 {
            warn!(
                period_start = %period_start,
                period_end = %period_end,
                open_records = rollup.open_skipped,
                "Excluding attendance records with no check-out"
            );
        }
        if rollup.hours.is_empty() {
            return Err(EngineError::validation(format!(
                "no qualifying attendance between {} and {}",
                period_start, period_end
            )));
        }

        let cap = normal_hours_cap(
            period_start,
            period_end,
            self.policy.overtime.daily_normal_hours,
        )?;
        let generated_at = Utc::now();
        let mut records = Vec::with_capacity(rollup.hours.len());
        for rolled in &rollup.hours {
            let profile = self
                .store
                .employee(&rolled.employee_id)?
                .ok_or_else(|| EngineError::not_found("employee", &rolled.employee_id))?;
            let figures = compute_salary(rolled.total_hours, profile.hourly_rate, cap, &self.policy);

            records.push(PayrollLineItem {
                id: Uuid::new_v4(),
                employee_id: profile.id,
                period_start,
                period_end,
                total_hours: figures.total_hours,
                base_salary: figures.base_salary,
                overtime_hours: figures.overtime_hours,
                overtime_pay: figures.overtime_pay,
                philhealth: figures.deductions.philhealth,
                sss: figures.deductions.sss,
                pagibig: figures.deductions.pagibig,
                total_deductions: figures.deductions.total,
                final_salary: figures.final_salary,
                status: GenerationStatus::Pending,
                generated_by: generated_by.to_string(),
                generated_at,
            });
        }

        match self.store.insert_line_items(records.clone()) {
            Ok(()) => {
                info!(
                    period_start = %period_start,
                    period_end = %period_end,
                    records = records.len(),
                    "Payroll generated"
                );
                Ok(GeneratedPayroll {
                    records,
                    kind: GenerationKind::New,
                })
            }
            Err(EngineError::Conflict { .. }) => {
                // A concurrent run inserted first; its rows are the result.
                let winner = self.store.line_items_for_period(period_start, period_end)?;
                if winner.is_empty() {
                    return Err(EngineError::conflict(format!(
                        "payroll generation for {} to {} lost a race and found no stored rows",
                        period_start, period_end
                    )));
                }
                info!(
                    period_start = %period_start,
                    period_end = %period_end,
                    records = winner.len(),
                    "Concurrent generation won the period, returning its line items"
                );
                Ok(GeneratedPayroll {
                    records: winner,
                    kind: GenerationKind::Existing,
                })
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollPolicy;
    use crate::models::{AttendanceRecord, AttendanceStatus, EmployeeProfile};
    use crate::store::{InMemoryStore, PayrollStore};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn seed_workday(store: &InMemoryStore, id: &str, employee_id: &str, date: &str, hours: u32) {
        let day = make_date(date);
        store
            .seed_attendance(AttendanceRecord {
                id: id.to_string(),
                employee_id: employee_id.to_string(),
                work_date: day,
                check_in: day.and_hms_opt(8, 0, 0).unwrap(),
                check_out: Some(day.and_hms_opt(8 + hours, 0, 0).unwrap()),
                status: AttendanceStatus::Present,
            })
            .unwrap();
    }

    fn engine_with_employee(rate: &str) -> (PayrollEngine, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        store
            .seed_employee(EmployeeProfile {
                id: "emp_001".to_string(),
                full_name: "Ana Reyes".to_string(),
                hourly_rate: dec(rate),
            })
            .unwrap();
        let engine = PayrollEngine::new(store.clone(), PayrollPolicy::default());
        (engine, store)
    }

    #[test]
    fn test_inverted_period_is_rejected() {
        let (engine, _store) = engine_with_employee("100");

        let err = engine
            .generate_for_period(make_date("2025-06-15"), make_date("2025-06-01"), "hr_admin")
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_blank_actor_is_rejected() {
        let (engine, _store) = engine_with_employee("100");

        let err = engine
            .generate_for_period(make_date("2025-06-01"), make_date("2025-06-15"), "  ")
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_no_attendance_is_rejected() {
        let (engine, _store) = engine_with_employee("100");

        let err = engine
            .generate_for_period(make_date("2025-06-01"), make_date("2025-06-15"), "hr_admin")
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("no qualifying attendance"));
    }

    #[test]
    fn test_zero_duration_attendance_fails_generation() {
        let (engine, store) = engine_with_employee("100");
        seed_workday(&store, "att_1", "emp_001", "2025-06-02", 0);

        let err = engine
            .generate_for_period(make_date("2025-06-01"), make_date("2025-06-15"), "hr_admin")
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("att_1"));

        let stored = store
            .line_items_for_period(make_date("2025-06-01"), make_date("2025-06-15"))
            .unwrap();
        assert!(stored.is_empty());
    }

    #[test]
    fn test_unknown_employee_in_attendance_is_not_found() {
        let (engine, store) = engine_with_employee("100");
        seed_workday(&store, "att_1", "emp_ghost", "2025-06-02", 8);

        let err = engine
            .generate_for_period(make_date("2025-06-01"), make_date("2025-06-15"), "hr_admin")
            .unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
        assert!(err.to_string().contains("emp_ghost"));
    }

    #[test]
    fn test_reference_scenario_figures() {
        // Rate 100/h over a 10-day period: cap is 80h, so 84 worked hours
        // split into 80 normal + 4 overtime.
        let (engine, store) = engine_with_employee("100");
        for day in 1..=10 {
            let date = format!("2025-06-{:02}", day);
            let hours = if day <= 4 { 9 } else { 8 };
            seed_workday(&store, &format!("att_{}", day), "emp_001", &date, hours);
        }

        let generated = engine
            .generate_for_period(make_date("2025-06-01"), make_date("2025-06-10"), "hr_admin")
            .unwrap();

        assert_eq!(generated.kind, GenerationKind::New);
        assert_eq!(generated.records.len(), 1);
        let record = &generated.records[0];
        assert_eq!(record.total_hours, dec("84"));
        assert_eq!(record.base_salary, dec("8400"));
        assert_eq!(record.overtime_hours, dec("4"));
        assert_eq!(record.overtime_pay, dec("600"));
        assert_eq!(record.philhealth, dec("189"));
        assert_eq!(record.sss, dec("472.92"));
        assert_eq!(record.pagibig, dec("100"));
        assert_eq!(record.total_deductions, dec("761.92"));
        assert_eq!(record.final_salary, dec("8238.08"));
        assert_eq!(record.status, GenerationStatus::Pending);
        assert_eq!(record.generated_by, "hr_admin");
    }

    #[test]
    fn test_second_run_returns_existing_rows() {
        let (engine, store) = engine_with_employee("100");
        seed_workday(&store, "att_1", "emp_001", "2025-06-02", 8);

        let first = engine
            .generate_for_period(make_date("2025-06-01"), make_date("2025-06-15"), "hr_admin")
            .unwrap();
        let second = engine
            .generate_for_period(make_date("2025-06-01"), make_date("2025-06-15"), "hr_admin")
            .unwrap();

        assert_eq!(first.kind, GenerationKind::New);
        assert_eq!(second.kind, GenerationKind::Existing);
        assert_eq!(first.records, second.records);

        let stored = store
            .line_items_for_period(make_date("2025-06-01"), make_date("2025-06-15"))
            .unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_open_check_in_is_excluded_from_totals() {
        let (engine, store) = engine_with_employee("100");
        seed_workday(&store, "att_1", "emp_001", "2025-06-02", 8);

        let day = make_date("2025-06-03");
        store
            .seed_attendance(AttendanceRecord {
                id: "att_open".to_string(),
                employee_id: "emp_001".to_string(),
                work_date: day,
                check_in: day.and_hms_opt(8, 0, 0).unwrap(),
                check_out: None,
                status: AttendanceStatus::Present,
            })
            .unwrap();

        let generated = engine
            .generate_for_period(make_date("2025-06-01"), make_date("2025-06-15"), "hr_admin")
            .unwrap();
        assert_eq!(generated.records[0].total_hours, dec("8"));
    }

    #[test]
    fn test_attendance_outside_period_is_ignored() {
        let (engine, store) = engine_with_employee("100");
        seed_workday(&store, "att_in", "emp_001", "2025-06-02", 8);
        seed_workday(&store, "att_out", "emp_001", "2025-06-20", 8);

        let generated = engine
            .generate_for_period(make_date("2025-06-01"), make_date("2025-06-15"), "hr_admin")
            .unwrap();
        assert_eq!(generated.records[0].total_hours, dec("8"));
    }

    #[test]
    fn test_generated_figures_are_internally_consistent() {
        let (engine, store) = engine_with_employee("120.50");
        for day in 2..=6 {
            seed_workday(
                &store,
                &format!("att_{}", day),
                "emp_001",
                &format!("2025-06-{:02}", day),
                9,
            );
        }

        let generated = engine
            .generate_for_period(make_date("2025-06-01"), make_date("2025-06-15"), "hr_admin")
            .unwrap();
        assert!(generated.records[0].figures_consistent());
    }
}
