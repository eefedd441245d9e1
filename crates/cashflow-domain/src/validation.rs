//! Structural checks performed once at the input boundary, before a budget
//! reaches the projection engine.

use chrono::NaiveDate;
use thiserror::Error;

use crate::budget::BudgetConfig;

pub const MIN_PROJECTION_MONTHS: u32 = 1;
pub const MAX_PROJECTION_MONTHS: u32 = 24;
pub const MIN_DAY_OF_MONTH: u32 = 1;
/// Upper bound shared by every month, so a bill never needs a fallback day.
pub const MAX_DAY_OF_MONTH: u32 = 28;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("projection horizon of {0} month(s) is outside 1..=24")]
    ProjectionMonths(u32),
    #[error("`{label}`: day of month {day} is outside 1..=28")]
    DayOfMonth { label: String, day: u32 },
    #[error("`{label}`: {field} must be a finite number, got {value}")]
    NonFinite {
        label: String,
        field: &'static str,
        value: f64,
    },
    #[error("`{label}`: {field} must not be negative, got {value}")]
    Negative {
        label: String,
        field: &'static str,
        value: f64,
    },
    #[error("`{label}`: end date {end} is before start date {start}")]
    EndBeforeStart {
        label: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl BudgetConfig {
    /// Returns the first structural problem found, if any.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_PROJECTION_MONTHS..=MAX_PROJECTION_MONTHS).contains(&self.projection_months) {
            return Err(ValidationError::ProjectionMonths(self.projection_months));
        }
        finite("budget", "initial balance", self.initial_balance)?;

        for income in &self.recurring_incomes {
            non_negative(&income.label, "hours per week", income.hours_per_week)?;
            non_negative(&income.label, "hourly rate", income.hourly_rate)?;
            if let Some(end) = income.end_date {
                if end < income.start_date {
                    return Err(ValidationError::EndBeforeStart {
                        label: income.label.clone(),
                        start: income.start_date,
                        end,
                    });
                }
            }
        }
        for income in &self.one_time_incomes {
            non_negative(&income.label, "amount", income.amount)?;
        }
        for expense in &self.recurring_expenses {
            non_negative(&expense.label, "amount", expense.amount)?;
            if !(MIN_DAY_OF_MONTH..=MAX_DAY_OF_MONTH).contains(&expense.day_of_month) {
                return Err(ValidationError::DayOfMonth {
                    label: expense.label.clone(),
                    day: expense.day_of_month,
                });
            }
        }
        for expense in &self.one_time_expenses {
            non_negative(&expense.label, "amount", expense.amount)?;
        }

        let food = &self.food_budget;
        non_negative("food budget", "breakfast", food.breakfast)?;
        non_negative("food budget", "lunch", food.lunch)?;
        non_negative("food budget", "dinner", food.dinner)?;
        non_negative("food budget", "snacks", food.snacks)?;
        non_negative("food budget", "weekend daily total", food.weekend_daily_total)?;

        let auto = &self.transport_config.auto;
        non_negative("auto transport", "weekday miles", auto.weekday_miles)?;
        non_negative("auto transport", "weekend miles", auto.weekend_miles)?;
        // mpg <= 0 is tolerated; the cost calculator treats it as no fuel spend.
        finite("auto transport", "mpg", auto.mpg)?;
        non_negative("auto transport", "fuel cost per gallon", auto.fuel_cost_per_gallon)?;
        non_negative(
            "public transit",
            "weekly cost",
            self.transport_config.public_transit.weekly_cost,
        )?;

        Ok(())
    }
}

fn finite(label: &str, field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite {
            label: label.to_string(),
            field,
            value,
        })
    }
}

fn non_negative(label: &str, field: &'static str, value: f64) -> Result<(), ValidationError> {
    finite(label, field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative {
            label: label.to_string(),
            field,
            value,
        });
    }
    Ok(())
}
