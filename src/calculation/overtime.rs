//! Overtime detection functionality.
//!
//! This module splits a period's total worked hours into normal and overtime
//! portions against the period's normal-hours cap, and prices the overtime
//! premium.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The split of a period's worked hours at the normal-hours cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Hours up to the cap.
    pub normal_hours: Decimal,
    /// Hours exceeding the cap (zero when under it).
    pub overtime_hours: Decimal,
}

/// Returns the inclusive number of days between two dates.
///
/// Both endpoints count, so a period from the 1st to the 10th spans 10 days.
///
/// # Errors
///
/// Returns a `Validation` error when `end` precedes `start`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::period_day_count;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// assert_eq!(period_day_count(start, end).unwrap(), 10);
/// ```
pub fn period_day_count(start: NaiveDate, end: NaiveDate) -> EngineResult<i64> {
    if end < start {
        return Err(EngineError::validation(format!(
            "period end {} precedes period start {}",
            end, start
        )));
    }
    Ok((end - start).num_days() + 1)
}

/// Returns the normal-hours cap for a period: `daily_normal_hours` for each
/// day of the inclusive range.
///
/// # Errors
///
/// Returns a `Validation` error when `end` precedes `start`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::normal_hours_cap;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// let cap = normal_hours_cap(start, end, Decimal::new(8, 0)).unwrap();
/// assert_eq!(cap, Decimal::new(80, 0));
/// ```
pub fn normal_hours_cap(
    start: NaiveDate,
    end: NaiveDate,
    daily_normal_hours: Decimal,
) -> EngineResult<Decimal> {
    let days = period_day_count(start, end)?;
    Ok(daily_normal_hours * Decimal::new(days, 0))
}

/// Splits total worked hours at the normal-hours cap.
///
/// Hours up to the cap are normal; any excess is overtime. A total at or
/// under the cap yields zero overtime.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_overtime;
/// use rust_decimal::Decimal;
///
/// let split = split_overtime(Decimal::new(84, 0), Decimal::new(80, 0));
/// assert_eq!(split.normal_hours, Decimal::new(80, 0));
/// assert_eq!(split.overtime_hours, Decimal::new(4, 0));
/// ```
pub fn split_overtime(total_hours: Decimal, cap: Decimal) -> OvertimeSplit {
    if total_hours > cap {
        OvertimeSplit {
            normal_hours: cap,
            overtime_hours: total_hours - cap,
        }
    } else {
        OvertimeSplit {
            normal_hours: total_hours,
            overtime_hours: Decimal::ZERO,
        }
    }
}

/// Prices the overtime premium: `overtime_hours × hourly_rate × multiplier`.
///
/// The premium is paid on top of the base salary, which already covers every
/// worked hour at the plain rate.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::overtime_pay;
/// use rust_decimal::Decimal;
///
/// let pay = overtime_pay(
///     Decimal::new(4, 0),
///     Decimal::new(100, 0),
///     Decimal::new(15, 1), // 1.5
/// );
/// assert_eq!(pay, Decimal::new(600, 0));
/// ```
pub fn overtime_pay(overtime_hours: Decimal, hourly_rate: Decimal, multiplier: Decimal) -> Decimal {
    overtime_hours * hourly_rate * multiplier
}
