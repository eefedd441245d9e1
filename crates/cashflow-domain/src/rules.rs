use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{default_enabled, default_rule_id};

/// How often a recurring income pays out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Weekly,
    Biweekly,
    Monthly,
    /// Any cadence this engine does not understand. Never pays.
    #[serde(other)]
    Other,
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::Biweekly => "biweekly",
            PayFrequency::Monthly => "monthly",
            PayFrequency::Other => "other",
        };
        f.write_str(label)
    }
}

/// Hourly work that pays on a weekly, biweekly, or monthly cadence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringIncome {
    #[serde(default = "default_rule_id")]
    pub id: Uuid,
    pub label: String,
    pub hours_per_week: f64,
    pub hourly_rate: f64,
    pub frequency: PayFrequency,
    /// Anchor of the pay cycle, inclusive.
    pub start_date: NaiveDate,
    /// Last day a paycheck may land on, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl RecurringIncome {
    pub fn new(
        label: impl Into<String>,
        hours_per_week: f64,
        hourly_rate: f64,
        frequency: PayFrequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            hours_per_week,
            hourly_rate,
            frequency,
            start_date,
            end_date: None,
            enabled: true,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// Income received once, on a single calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OneTimeIncome {
    #[serde(default = "default_rule_id")]
    pub id: Uuid,
    pub label: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl OneTimeIncome {
    pub fn new(label: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            amount,
            date,
            enabled: true,
        }
    }
}

/// Expense paid once, on a single calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OneTimeExpense {
    #[serde(default = "default_rule_id")]
    pub id: Uuid,
    pub label: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl OneTimeExpense {
    pub fn new(label: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            amount,
            date,
            enabled: true,
        }
    }
}

/// Bill charged every month on a fixed day. `day_of_month` is kept within
/// 1..=28 at the validation boundary so every month has a matching day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    #[serde(default = "default_rule_id")]
    pub id: Uuid,
    pub label: String,
    pub amount: f64,
    pub day_of_month: u32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl RecurringExpense {
    pub fn new(label: impl Into<String>, amount: f64, day_of_month: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            amount,
            day_of_month,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_enabled_defaults_to_true() {
        let json = r#"{"label":"Rent","amount":800.0,"dayOfMonth":1}"#;
        let expense: RecurringExpense = serde_json::from_str(json).unwrap();
        assert!(expense.enabled);
        assert_eq!(expense.day_of_month, 1);
    }

    #[test]
    fn explicit_disabled_is_preserved() {
        let json = r#"{"label":"Gift","amount":50,"date":"2025-03-01","enabled":false}"#;
        let income: OneTimeIncome = serde_json::from_str(json).unwrap();
        assert!(!income.enabled);
    }

    #[test]
    fn unknown_frequency_deserializes_to_other() {
        let json = r#"{
            "label": "Gig",
            "hoursPerWeek": 10,
            "hourlyRate": 20,
            "frequency": "quarterly",
            "startDate": "2025-01-01"
        }"#;
        let income: RecurringIncome = serde_json::from_str(json).unwrap();
        assert_eq!(income.frequency, PayFrequency::Other);
        assert!(income.end_date.is_none());
        assert!(income.enabled);
    }

    #[test]
    fn rule_ids_are_generated_when_absent() {
        let json = r#"{"label":"Car","amount":100,"date":"2025-05-05"}"#;
        let a: OneTimeExpense = serde_json::from_str(json).unwrap();
        let b: OneTimeExpense = serde_json::from_str(json).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.label, "Car");
    }

    #[test]
    fn frequency_is_required() {
        let json = r#"{
            "label": "Gig",
            "hoursPerWeek": 10,
            "hourlyRate": 20,
            "startDate": "2025-01-01"
        }"#;
        let err = serde_json::from_str::<RecurringIncome>(json).unwrap_err();
        assert!(err.to_string().contains("frequency"), "{err}");
    }
}
