use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Income,
    Expense,
}

/// One discrete rule match on a simulated day. Standing food and transport
/// costs are folded into the day's totals without an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyEvent {
    pub label: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub is_one_time: bool,
}

impl DailyEvent {
    pub fn income(label: impl Into<String>, amount: f64, is_one_time: bool) -> Self {
        Self {
            label: label.into(),
            amount,
            kind: EventKind::Income,
            is_one_time,
        }
    }

    pub fn expense(label: impl Into<String>, amount: f64, is_one_time: bool) -> Self {
        Self {
            label: label.into(),
            amount,
            kind: EventKind::Expense,
            is_one_time,
        }
    }
}

/// Computed state for one calendar day of a projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub balance: f64,
    pub income_today: f64,
    pub expenses_today: f64,
    #[serde(default)]
    pub events: Vec<DailyEvent>,
}

impl DailySnapshot {
    pub fn is_negative(&self) -> bool {
        self.balance < 0.0
    }
}
