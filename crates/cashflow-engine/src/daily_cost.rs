//! Standing food and commuting costs for a single day.

use chrono::NaiveDate;

use cashflow_domain::{is_weekend, FoodBudget, TransportConfig};

const DAYS_PER_WEEK: f64 = 7.0;

pub fn daily_food_cost(food: &FoodBudget, date: NaiveDate) -> f64 {
    if !food.enabled {
        return 0.0;
    }
    if is_weekend(date) {
        food.weekend_daily_total
    } else {
        food.weekday_total()
    }
}

/// Fuel for the car plus an even seventh of the weekly transit pass.
/// A non-positive mpg contributes no fuel cost.
pub fn daily_transport_cost(transport: &TransportConfig, date: NaiveDate) -> f64 {
    if !transport.enabled {
        return 0.0;
    }
    let mut total = 0.0;

    let auto = &transport.auto;
    if auto.enabled && auto.mpg > 0.0 {
        let miles = if is_weekend(date) {
            auto.weekend_miles
        } else {
            auto.weekday_miles
        };
        total += (miles / auto.mpg) * auto.fuel_cost_per_gallon;
    }

    let transit = &transport.public_transit;
    if transit.enabled {
        total += transit.weekly_cost / DAYS_PER_WEEK;
    }

    total
}
