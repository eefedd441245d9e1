//! Aggregate totals over a projection, whole-horizon and per calendar month.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use cashflow_domain::{round_currency, DailySnapshot, EventKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub days: usize,
    pub starting_balance: f64,
    pub ending_balance: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_change: f64,
    pub income_events: usize,
    pub expense_events: usize,
}

impl ProjectionSummary {
    /// An empty sequence reports the starting balance as the ending balance.
    pub fn from_snapshots(initial_balance: f64, snapshots: &[DailySnapshot]) -> Self {
        let mut summary = ProjectionSummary {
            days: snapshots.len(),
            starting_balance: initial_balance,
            ending_balance: snapshots
                .last()
                .map(|snapshot| snapshot.balance)
                .unwrap_or(initial_balance),
            ..ProjectionSummary::default()
        };
        for snapshot in snapshots {
            summary.total_income += snapshot.income_today;
            summary.total_expenses += snapshot.expenses_today;
            for event in &snapshot.events {
                match event.kind {
                    EventKind::Income => summary.income_events += 1,
                    EventKind::Expense => summary.expense_events += 1,
                }
            }
        }
        summary.total_income = round_currency(summary.total_income);
        summary.total_expenses = round_currency(summary.total_expenses);
        summary.net_change = round_currency(summary.ending_balance - initial_balance);
        summary
    }
}

/// Totals for one calendar month touched by a projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
    pub closing_balance: f64,
    pub min_balance: f64,
}

impl MonthlyTotals {
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Groups consecutive snapshots by calendar month, in sequence order.
pub fn monthly_rollup(snapshots: &[DailySnapshot]) -> Vec<MonthlyTotals> {
    let mut months: Vec<MonthlyTotals> = Vec::new();
    for snapshot in snapshots {
        let (year, month) = (snapshot.date.year(), snapshot.date.month());
        match months.last_mut() {
            Some(current) if current.year == year && current.month == month => {
                current.income += snapshot.income_today;
                current.expenses += snapshot.expenses_today;
                current.closing_balance = snapshot.balance;
                if snapshot.balance < current.min_balance {
                    current.min_balance = snapshot.balance;
                }
            }
            _ => months.push(MonthlyTotals {
                year,
                month,
                income: snapshot.income_today,
                expenses: snapshot.expenses_today,
                closing_balance: snapshot.balance,
                min_balance: snapshot.balance,
            }),
        }
    }
    for totals in &mut months {
        totals.income = round_currency(totals.income);
        totals.expenses = round_currency(totals.expenses);
    }
    months
}
