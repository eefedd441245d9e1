use serde::{Deserialize, Serialize};

use crate::rules::{OneTimeExpense, OneTimeIncome, RecurringExpense, RecurringIncome};

/// Root input of a projection run. Never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetConfig {
    pub initial_balance: f64,
    pub projection_months: u32,
    #[serde(default)]
    pub recurring_incomes: Vec<RecurringIncome>,
    #[serde(default)]
    pub one_time_incomes: Vec<OneTimeIncome>,
    #[serde(default)]
    pub recurring_expenses: Vec<RecurringExpense>,
    #[serde(default)]
    pub one_time_expenses: Vec<OneTimeExpense>,
    #[serde(default)]
    pub food_budget: FoodBudget,
    #[serde(default)]
    pub transport_config: TransportConfig,
}

impl BudgetConfig {
    pub fn new(initial_balance: f64, projection_months: u32) -> Self {
        Self {
            initial_balance,
            projection_months,
            recurring_incomes: Vec::new(),
            one_time_incomes: Vec::new(),
            recurring_expenses: Vec::new(),
            one_time_expenses: Vec::new(),
            food_budget: FoodBudget::default(),
            transport_config: TransportConfig::default(),
        }
    }

    /// Total number of discrete rules across all four collections.
    pub fn rule_count(&self) -> usize {
        self.recurring_incomes.len()
            + self.one_time_incomes.len()
            + self.recurring_expenses.len()
            + self.one_time_expenses.len()
    }
}

/// Standing daily food spend. Weekdays sum the four meals; weekends use a flat total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodBudget {
    pub enabled: bool,
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snacks: f64,
    pub weekend_daily_total: f64,
}

impl FoodBudget {
    pub fn weekday_total(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner + self.snacks
    }
}

/// Standing daily commuting spend, split into car and public-transit parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportConfig {
    pub enabled: bool,
    pub auto: AutoTransport,
    pub public_transit: PublicTransit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoTransport {
    pub enabled: bool,
    pub weekday_miles: f64,
    pub weekend_miles: f64,
    pub mpg: f64,
    pub fuel_cost_per_gallon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicTransit {
    pub enabled: bool,
    pub weekly_cost: f64,
}
