//! Attendance record model.
//!
//! This module defines the [`AttendanceRecord`] struct and
//! [`AttendanceStatus`] enum for the raw check-in/check-out rows consumed
//! from the attendance collaborator. The rows are read-only to this core.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily status recorded against an attendance row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee checked in on site.
    Present,
    /// The employee did not report for the day.
    Absent,
    /// The employee was on an approved leave.
    OnLeave,
}

/// One raw attendance row: a check-in, an optional check-out, and a status.
///
/// Only `Present` rows with both timestamps populated contribute to payroll
/// hours; a row whose check-out is still missing is "open" and excluded
/// from totals.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     id: "att_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     work_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     check_in: NaiveDateTime::parse_from_str("2025-06-02 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     check_out: Some(
///         NaiveDateTime::parse_from_str("2025-06-02 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     ),
///     status: AttendanceStatus::Present,
/// };
/// assert_eq!(record.worked_hours(), Some(Decimal::new(90, 1))); // 9.0 hours
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Row identifier assigned by the attendance collaborator.
    pub id: String,
    /// The employee this row belongs to.
    pub employee_id: String,
    /// The work date of the row.
    pub work_date: NaiveDate,
    /// When the employee checked in.
    pub check_in: NaiveDateTime,
    /// When the employee checked out; `None` while the row is still open.
    pub check_out: Option<NaiveDateTime>,
    /// The recorded daily status.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Returns true while the row has no check-out yet.
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }

    /// Returns the hours between check-in and check-out, or `None` while
    /// the row is open.
    ///
    /// The duration is computed in whole minutes and converted to hours as a
    /// `Decimal`, so 7:00 to 16:30 yields exactly 9.5.
    pub fn worked_hours(&self) -> Option<Decimal> {
        let check_out = self.check_out?;
        let minutes = (check_out - self.check_in).num_minutes();
        Some(Decimal::new(minutes, 0) / Decimal::new(60, 0))
    }
}
