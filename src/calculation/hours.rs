//! Attendance aggregation functionality.
//!
//! This module converts raw check-in/check-out rows into worked hours per
//! employee for a pay period. Grouping is keyed by employee identity in an
//! explicit map; correctness never depends on the order rows arrive in.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus};

/// Total worked hours for one employee over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedHours {
    /// The employee the hours belong to.
    pub employee_id: String,
    /// Sum of worked hours over qualifying attendance rows.
    pub total_hours: Decimal,
    /// How many attendance rows contributed to the total.
    pub records_counted: usize,
}

/// The result of aggregating a period's attendance rows.
///
/// `open_skipped` counts Present rows that were excluded because their
/// check-out is still missing; callers surface the count so the exclusion
/// stays visible to the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRollup {
    /// Per-employee totals, ordered by employee id.
    pub hours: Vec<AggregatedHours>,
    /// Present rows excluded because they had no check-out.
    pub open_skipped: usize,
}

/// Aggregates raw attendance rows into per-employee worked hours.
///
/// Only rows with status `Present` and both timestamps populated contribute.
/// Open rows (no check-out yet) are excluded from totals and counted in
/// [`AttendanceRollup::open_skipped`]; `Absent` and `OnLeave` rows are
/// ignored. Rows are grouped by employee identity, so interleaved input
/// produces the same totals as sorted input.
///
/// # Errors
///
/// Returns a `Validation` error when a Present row's check-out is not after
/// its check-in; such a row is corrupt and silently dropping it would hide
/// paid time.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate_hours;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let day = |d: &str, from: &str, to: &str, emp: &str| AttendanceRecord {
///     id: format!("att_{emp}_{d}"),
///     employee_id: emp.to_string(),
///     work_date: NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
///     check_in: NaiveDateTime::parse_from_str(&format!("{d} {from}"), "%Y-%m-%d %H:%M:%S").unwrap(),
///     check_out: Some(
///         NaiveDateTime::parse_from_str(&format!("{d} {to}"), "%Y-%m-%d %H:%M:%S").unwrap(),
///     ),
///     status: AttendanceStatus::Present,
/// };
///
/// // Interleaved rows for two employees
/// let records = vec![
///     day("2025-06-02", "07:00:00", "15:00:00", "emp_b"),
///     day("2025-06-02", "07:00:00", "16:00:00", "emp_a"),
///     day("2025-06-03", "07:00:00", "15:00:00", "emp_b"),
/// ];
///
/// let rollup = aggregate_hours(&records).unwrap();
/// assert_eq!(rollup.hours.len(), 2);
/// assert_eq!(rollup.hours[0].employee_id, "emp_a");
/// assert_eq!(rollup.hours[0].total_hours, Decimal::new(90, 1)); // 9.0
/// assert_eq!(rollup.hours[1].employee_id, "emp_b");
/// assert_eq!(rollup.hours[1].total_hours, Decimal::new(160, 1)); // 16.0
/// ```
pub fn aggregate_hours(records: &[AttendanceRecord]) -> EngineResult<AttendanceRollup> {
    let mut totals: BTreeMap<&str, (Decimal, usize)> = BTreeMap::new();
    let mut open_skipped = 0usize;

    for record in records {
        if record.status != AttendanceStatus::Present {
            continue;
        }

        let Some(check_out) = record.check_out else {
            open_skipped += 1;
            continue;
        };

        if check_out <= record.check_in {
            return Err(EngineError::validation(format!(
                "attendance row '{}' has check-out at or before check-in",
                record.id
            )));
        }

        // worked_hours is Some here: the row has a check-out
        let hours = record.worked_hours().unwrap_or(Decimal::ZERO);
        let entry = totals
            .entry(record.employee_id.as_str())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += hours;
        entry.1 += 1;
    }

    let hours = totals
        .into_iter()
        .map(|(employee_id, (total_hours, records_counted))| AggregatedHours {
            employee_id: employee_id.to_string(),
            total_hours,
            records_counted,
        })
        .collect();

    Ok(AttendanceRollup {
        hours,
        open_skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn present(id: &str, employee: &str, date: &str, from: &str, to: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_string(),
            employee_id: employee.to_string(),
            work_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            check_in: make_datetime(date, from),
            check_out: Some(make_datetime(date, to)),
            status: AttendanceStatus::Present,
        }
    }

    fn open_row(id: &str, employee: &str, date: &str, from: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_string(),
            employee_id: employee.to_string(),
            work_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            check_in: make_datetime(date, from),
            check_out: None,
            status: AttendanceStatus::Present,
        }
    }

    #[test]
    fn test_single_employee_sums_across_days() {
        let records = vec![
            present("a1", "emp_001", "2025-06-02", "07:00:00", "15:00:00"),
            present("a2", "emp_001", "2025-06-03", "07:00:00", "16:00:00"),
        ];

        let rollup = aggregate_hours(&records).unwrap();
        assert_eq!(rollup.hours.len(), 1);
        assert_eq!(rollup.hours[0].total_hours, Decimal::new(170, 1)); // 17.0
        assert_eq!(rollup.hours[0].records_counted, 2);
        assert_eq!(rollup.open_skipped, 0);
    }

    #[test]
    fn test_grouping_by_identity_not_adjacency() {
        // Rows deliberately interleaved: totals must not depend on row order.
        let records = vec![
            present("a1", "emp_002", "2025-06-02", "07:00:00", "15:00:00"),
            present("a2", "emp_001", "2025-06-02", "07:00:00", "15:00:00"),
            present("a3", "emp_002", "2025-06-03", "07:00:00", "15:00:00"),
            present("a4", "emp_001", "2025-06-03", "07:00:00", "15:00:00"),
            present("a5", "emp_002", "2025-06-04", "07:00:00", "15:00:00"),
        ];

        let rollup = aggregate_hours(&records).unwrap();
        assert_eq!(rollup.hours.len(), 2);
        assert_eq!(rollup.hours[0].employee_id, "emp_001");
        assert_eq!(rollup.hours[0].total_hours, Decimal::new(160, 1)); // 16.0
        assert_eq!(rollup.hours[1].employee_id, "emp_002");
        assert_eq!(rollup.hours[1].total_hours, Decimal::new(240, 1)); // 24.0
    }

    #[test]
    fn test_shuffled_input_matches_sorted_input() {
        let sorted = vec![
            present("a1", "emp_001", "2025-06-02", "07:00:00", "15:00:00"),
            present("a2", "emp_001", "2025-06-03", "07:00:00", "15:00:00"),
            present("a3", "emp_002", "2025-06-02", "08:00:00", "17:00:00"),
        ];
        let mut shuffled = sorted.clone();
        shuffled.reverse();

        assert_eq!(
            aggregate_hours(&sorted).unwrap(),
            aggregate_hours(&shuffled).unwrap()
        );
    }

    #[test]
    fn test_open_rows_excluded_and_counted() {
        let records = vec![
            present("a1", "emp_001", "2025-06-02", "07:00:00", "15:00:00"),
            open_row("a2", "emp_001", "2025-06-03", "07:00:00"),
            open_row("a3", "emp_002", "2025-06-03", "07:00:00"),
        ];

        let rollup = aggregate_hours(&records).unwrap();
        assert_eq!(rollup.open_skipped, 2);
        assert_eq!(rollup.hours.len(), 1);
        assert_eq!(rollup.hours[0].employee_id, "emp_001");
        assert_eq!(rollup.hours[0].total_hours, Decimal::new(80, 1)); // 8.0
    }

    #[test]
    fn test_non_present_rows_ignored() {
        let mut absent = present("a1", "emp_001", "2025-06-02", "07:00:00", "15:00:00");
        absent.status = AttendanceStatus::Absent;
        let mut on_leave = present("a2", "emp_001", "2025-06-03", "07:00:00", "15:00:00");
        on_leave.status = AttendanceStatus::OnLeave;

        let rollup = aggregate_hours(&[absent, on_leave]).unwrap();
        assert!(rollup.hours.is_empty());
        assert_eq!(rollup.open_skipped, 0);
    }

    #[test]
    fn test_zero_duration_row_is_rejected() {
        let records = vec![present("a1", "emp_001", "2025-06-02", "07:00:00", "07:00:00")];

        let err = aggregate_hours(&records).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("a1"));
    }

    #[test]
    fn test_check_out_before_check_in_is_rejected() {
        let mut record = present("a9", "emp_001", "2025-06-02", "15:00:00", "15:00:00");
        record.check_out = Some(make_datetime("2025-06-02", "07:00:00"));

        let err = aggregate_hours(&[record]).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("att") || err.to_string().contains("a9"));
    }

    #[test]
    fn test_empty_input_yields_empty_rollup() {
        let rollup = aggregate_hours(&[]).unwrap();
        assert!(rollup.hours.is_empty());
        assert_eq!(rollup.open_skipped, 0);
    }

    #[test]
    fn test_minute_granularity_survives_aggregation() {
        let records = vec![
            present("a1", "emp_001", "2025-06-02", "07:00:00", "11:15:00"), // 4.25
            present("a2", "emp_001", "2025-06-03", "07:00:00", "12:45:00"), // 5.75
        ];

        let rollup = aggregate_hours(&records).unwrap();
        assert_eq!(rollup.hours[0].total_hours, Decimal::new(100, 1)); // 10.0
    }
}
