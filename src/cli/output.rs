use std::fmt::{self, Write as _};

use colored::Colorize;

use cashflow_domain::{DailySnapshot, EventKind};
use cashflow_engine::{ProjectionReport, ProjectionSummary};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Warning,
    Section,
}

/// Enables or disables ANSI styling for the rest of the process. `NO_COLOR`
/// always wins over the stored preference.
pub fn configure(color_output: bool) {
    if !color_output || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
}

pub fn styled(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Success => format!("SUCCESS: {text}").bright_green().to_string(),
        MessageKind::Warning => format!("WARNING: [!] {text}").bright_yellow().to_string(),
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    println!("{}", styled(kind, message));
}

/// Two decimals, with negative zero printed as zero.
pub fn amount(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}

fn balance_cell(value: f64, width: usize) -> String {
    let cell = format!("{:>width$}", amount(value));
    if value < 0.0 {
        cell.bright_red().to_string()
    } else {
        cell
    }
}

fn describe_events(snapshot: &DailySnapshot) -> String {
    snapshot
        .events
        .iter()
        .map(|event| {
            let sign = match event.kind {
                EventKind::Income => '+',
                EventKind::Expense => '-',
            };
            format!("{}{} {}", sign, amount(event.amount), event.label)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Day-by-day table: one header row plus one row per snapshot.
pub fn render_table(snapshots: &[DailySnapshot]) -> String {
    let mut out = format!(
        "{:<10}  {:>10}  {:>10}  {:>12}  Events\n",
        "Date", "Income", "Expenses", "Balance"
    );
    for snapshot in snapshots {
        let _ = writeln!(
            out,
            "{:<10}  {:>10}  {:>10}  {}  {}",
            snapshot.date.format("%Y-%m-%d"),
            amount(snapshot.income_today),
            amount(snapshot.expenses_today),
            balance_cell(snapshot.balance, 12),
            describe_events(snapshot)
        );
    }
    out
}

fn render_totals(summary: &ProjectionSummary, currency: &str) -> String {
    let mut out = String::new();
    let rows = [
        ("Starting balance", summary.starting_balance),
        ("Ending balance", summary.ending_balance),
        ("Total income", summary.total_income),
        ("Total expenses", summary.total_expenses),
        ("Net change", summary.net_change),
    ];
    let _ = writeln!(out, "Days projected: {}", summary.days);
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<17} {} {currency}", amount(value));
    }
    let _ = writeln!(
        out,
        "Events: {} income, {} expense",
        summary.income_events, summary.expense_events
    );
    out
}

/// Full multi-section report printed by `summary`.
pub fn render_summary(report: &ProjectionReport, currency: &str) -> String {
    let mut out = String::new();
    let heading = match report.end_date() {
        Some(end) => format!("Projection {} to {}", report.today, end),
        None => format!("Projection from {}", report.today),
    };
    let _ = writeln!(out, "{}", styled(MessageKind::Section, heading));
    out.push_str(&render_totals(&report.summary, currency));

    match &report.danger {
        Some(day) => {
            let _ = writeln!(
                out,
                "{}",
                styled(
                    MessageKind::Warning,
                    format!(
                        "Balance goes negative on {} ({} {currency})",
                        day.date,
                        amount(day.balance)
                    )
                )
            );
        }
        None => {
            let _ = writeln!(
                out,
                "{}",
                styled(MessageKind::Success, "Balance never goes negative")
            );
        }
    }
    if let Some(low) = &report.lowest {
        let _ = writeln!(
            out,
            "Lowest balance: {} {currency} on {}",
            amount(low.balance),
            low.date
        );
    }

    let _ = writeln!(out, "{}", styled(MessageKind::Section, "Monthly"));
    let _ = writeln!(
        out,
        "{:<7}  {:>10}  {:>10}  {:>12}  {:>12}",
        "Month", "Income", "Expenses", "Closing", "Minimum"
    );
    for month in &report.months {
        let _ = writeln!(
            out,
            "{:<7}  {:>10}  {:>10}  {}  {}",
            month.label(),
            amount(month.income),
            amount(month.expenses),
            balance_cell(month.closing_balance, 12),
            balance_cell(month.min_balance, 12)
        );
    }

    if !report.markers.is_empty() {
        let _ = writeln!(out, "{}", styled(MessageKind::Section, "One-time events"));
        for marker in &report.markers {
            let sign = match marker.event.kind {
                EventKind::Income => '+',
                EventKind::Expense => '-',
            };
            let _ = writeln!(
                out,
                "{}  {}{}  {}",
                marker.date,
                sign,
                amount(marker.event.amount),
                marker.event.label
            );
        }
    }
    out
}
