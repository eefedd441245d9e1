//! Payday arithmetic for recurring incomes.

use chrono::{Datelike, NaiveDate};

use cashflow_domain::{days_between, PayFrequency, RecurringIncome};

/// Average number of weeks in a calendar month (52 / 12).
pub const WEEKS_PER_MONTH: f64 = 52.0 / 12.0;

/// Gross amount of a single paycheck for the income's cadence.
///
/// Monthly pay is the annualised weekly pay spread over twelve months, not the
/// exact number of working weeks in any particular month.
pub fn paycheck_amount(income: &RecurringIncome) -> f64 {
    let weekly = income.hours_per_week * income.hourly_rate;
    match income.frequency {
        PayFrequency::Weekly => weekly,
        PayFrequency::Biweekly => weekly * 2.0,
        PayFrequency::Monthly => weekly * WEEKS_PER_MONTH,
        PayFrequency::Other => 0.0,
    }
}

/// Whether `income` pays out on `date`.
///
/// Dates before the anchor or after the optional end date never pay. Monthly
/// incomes pay on the anchor's day of month only; months without that day
/// (an anchor on the 31st in a 30-day month) produce no paycheck.
pub fn is_payday(date: NaiveDate, income: &RecurringIncome) -> bool {
    let days_diff = days_between(income.start_date, date);
    if days_diff < 0 {
        return false;
    }
    if income.end_date.is_some_and(|end| date > end) {
        return false;
    }
    match income.frequency {
        PayFrequency::Weekly => days_diff % 7 == 0,
        PayFrequency::Biweekly => days_diff % 14 == 0,
        PayFrequency::Monthly => date.day() == income.start_date.day(),
        PayFrequency::Other => false,
    }
}
