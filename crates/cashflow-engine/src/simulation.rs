//! Day-by-day fold from a budget configuration to balance snapshots.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use cashflow_domain::{
    add_months, days_between, round_currency, BudgetConfig, DailyEvent, DailySnapshot,
};

use crate::{
    daily_cost::{daily_food_cost, daily_transport_cost},
    error::ProjectionError,
    payday::{is_payday, paycheck_amount},
};

/// Last simulated day: `today` plus the budget's horizon in calendar months.
pub fn horizon_end(today: NaiveDate, projection_months: u32) -> Result<NaiveDate, ProjectionError> {
    add_months(today, projection_months).ok_or(ProjectionError::HorizonOutOfRange {
        today,
        months: projection_months,
    })
}

/// Projects `config` forward from `today`, producing one snapshot per calendar
/// day from `today` through the horizon end, both inclusive.
///
/// The running balance starts at `initial_balance` and is the only state
/// carried between days. Within a day, events are ordered recurring incomes,
/// one-time incomes, recurring expenses, then one-time expenses.
pub fn project(
    config: &BudgetConfig,
    today: NaiveDate,
) -> Result<Vec<DailySnapshot>, ProjectionError> {
    let end = horizon_end(today, config.projection_months)?;
    let total_days = days_between(today, end);
    debug!(
        %today,
        %end,
        total_days,
        rules = config.rule_count(),
        "projecting budget"
    );

    let mut snapshots = Vec::with_capacity(total_days as usize + 1);
    let mut balance = config.initial_balance;

    for date in today.iter_days().take(total_days as usize + 1) {
        let mut income_today = 0.0;
        let mut expenses_today = daily_food_cost(&config.food_budget, date)
            + daily_transport_cost(&config.transport_config, date);
        let mut events = Vec::new();

        for income in config
            .recurring_incomes
            .iter()
            .filter(|income| income.enabled && is_payday(date, income))
        {
            let amount = paycheck_amount(income);
            income_today += amount;
            events.push(DailyEvent::income(
                format!("{} paycheck", income.label),
                amount,
                false,
            ));
        }

        for income in config
            .one_time_incomes
            .iter()
            .filter(|income| income.enabled && income.date == date)
        {
            income_today += income.amount;
            events.push(DailyEvent::income(income.label.clone(), income.amount, true));
        }

        for expense in config
            .recurring_expenses
            .iter()
            .filter(|expense| expense.enabled && expense.day_of_month == date.day())
        {
            expenses_today += expense.amount;
            events.push(DailyEvent::expense(
                expense.label.clone(),
                expense.amount,
                false,
            ));
        }

        for expense in config
            .one_time_expenses
            .iter()
            .filter(|expense| expense.enabled && expense.date == date)
        {
            expenses_today += expense.amount;
            events.push(DailyEvent::expense(
                expense.label.clone(),
                expense.amount,
                true,
            ));
        }

        let income_today = checked_round(income_today, date, "income")?;
        let expenses_today = checked_round(expenses_today, date, "expenses")?;
        balance = checked_round(balance + income_today - expenses_today, date, "balance")?;

        if !events.is_empty() {
            trace!(%date, balance, events = events.len(), "matched rules");
        }

        snapshots.push(DailySnapshot {
            date,
            balance,
            income_today,
            expenses_today,
            events,
        });
    }

    Ok(snapshots)
}

fn checked_round(value: f64, date: NaiveDate, field: &'static str) -> Result<f64, ProjectionError> {
    if value.is_finite() {
        Ok(round_currency(value))
    } else {
        Err(ProjectionError::NonFiniteValue { date, field, value })
    }
}
