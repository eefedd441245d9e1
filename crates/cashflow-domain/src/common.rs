//! Calendar utilities, serde defaults and rounding for projection primitives.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use uuid::Uuid;

/// Number of decimal places every projected amount is rounded to.
pub const CURRENCY_DECIMALS: i32 = 2;

pub(crate) fn default_rule_id() -> Uuid {
    Uuid::new_v4()
}

pub(crate) fn default_enabled() -> bool {
    true
}

/// Rounds to whole cents, half away from zero.
pub fn round_currency(value: f64) -> f64 {
    let factor = 10_f64.powi(CURRENCY_DECIMALS);
    (value * factor).round() / factor
}

/// Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Signed count of calendar days from `start` to `end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Moves `date` forward by whole calendar months, clamping the day to the
/// target month's length. Returns `None` when the result is out of range.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let months = i32::try_from(months).ok()?;
    let index = (date.month0() as i32).checked_add(months)?;
    let year = date.year().checked_add(index.div_euclid(12))?;
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Length of the given month, or `None` for an unrepresentable year.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    let last_current = first_next - Duration::days(1);
    Some(last_current.day())
}
