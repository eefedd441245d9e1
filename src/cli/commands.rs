use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use cashflow_config::{Config, ConfigManager};
use cashflow_domain::{
    BudgetConfig, FoodBudget, OneTimeExpense, PayFrequency, RecurringExpense, RecurringIncome,
};
use cashflow_engine::{Clock, ProjectionReport, ProjectionService};

use super::{
    args::{Command, USAGE},
    output::{self, MessageKind},
};
use crate::{errors::CashflowError, utils::build_info, utils::persistence};

/// Shared state every command handler reads from.
pub struct CommandContext<'a> {
    pub manager: &'a ConfigManager,
    pub config: &'a Config,
    pub clock: &'a dyn Clock,
}

/// Runs commands that never read or write configuration. Any other command is
/// handed back so the caller can build a [`CommandContext`] for it.
pub fn execute_standalone(command: Command) -> Result<(), Command> {
    match command {
        Command::Version => {
            println!("{}", build_info::current());
            Ok(())
        }
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        other => Err(other),
    }
}

pub fn execute(command: Command, ctx: &CommandContext<'_>) -> Result<(), CashflowError> {
    debug!(?command, "dispatching command");
    let command = match execute_standalone(command) {
        Ok(()) => return Ok(()),
        Err(command) => command,
    };
    match command {
        Command::Project { file, today, json } => {
            let (path, report) = run_projection(ctx, file, today)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report.snapshots)?);
            } else {
                print!("{}", output::render_table(&report.snapshots));
            }
            remember(ctx, &path);
            Ok(())
        }
        Command::Summary { file, today } => {
            let (path, report) = run_projection(ctx, file, today)?;
            print!("{}", output::render_summary(&report, &ctx.config.currency));
            remember(ctx, &path);
            Ok(())
        }
        Command::Validate { file } => {
            let budget = persistence::load_budget_from_file(&file)?;
            output::print(
                MessageKind::Success,
                format!(
                    "{} is valid: {} rules over {} months",
                    file.display(),
                    budget.rule_count(),
                    budget.projection_months
                ),
            );
            remember(ctx, &file);
            Ok(())
        }
        Command::Template { months } => {
            let months = months.unwrap_or(ctx.config.default_projection_months);
            let budget = starter_budget(months, ctx.clock.today());
            budget.validate()?;
            println!("{}", serde_json::to_string_pretty(&budget)?);
            Ok(())
        }
        Command::Version | Command::Help => Ok(()),
    }
}

fn run_projection(
    ctx: &CommandContext<'_>,
    file: Option<PathBuf>,
    today: Option<NaiveDate>,
) -> Result<(PathBuf, ProjectionReport), CashflowError> {
    let path = resolve_budget_path(file, ctx.config)?;
    let budget = persistence::load_budget_from_file(&path)?;
    let report = match today {
        Some(day) => ProjectionService::run(&budget, day)?,
        None => ProjectionService::run_with_clock(&budget, ctx.clock)?,
    };
    info!(
        path = %path.display(),
        days = report.summary.days,
        goes_negative = report.goes_negative(),
        "projection complete"
    );
    Ok((path, report))
}

fn resolve_budget_path(file: Option<PathBuf>, config: &Config) -> Result<PathBuf, CashflowError> {
    file.or_else(|| config.last_opened_budget.clone())
        .ok_or_else(|| {
            CashflowError::Usage(
                "No budget file given and no budget has been opened before".into(),
            )
        })
}

/// Output has already been printed, so a failed write only warns.
fn remember(ctx: &CommandContext<'_>, path: &Path) {
    let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if let Err(err) = ctx.manager.remember_budget(&absolute) {
        warn!(path = %absolute.display(), error = %err, "could not record last opened budget");
    }
}

/// Small editable budget with one rule of each kind, anchored on `today`.
pub fn starter_budget(months: u32, today: NaiveDate) -> BudgetConfig {
    let mut budget = BudgetConfig::new(1000.0, months);
    budget.recurring_incomes.push(RecurringIncome::new(
        "Job",
        20.0,
        15.0,
        PayFrequency::Biweekly,
        today,
    ));
    budget
        .recurring_expenses
        .push(RecurringExpense::new("Rent", 800.0, 1));
    if let Some(next_week) = today.checked_add_days(chrono::Days::new(7)) {
        budget
            .one_time_expenses
            .push(OneTimeExpense::new("Car repair", 250.0, next_week));
    }
    budget.food_budget = FoodBudget {
        enabled: true,
        breakfast: 3.0,
        lunch: 10.0,
        dinner: 12.0,
        snacks: 2.0,
        weekend_daily_total: 30.0,
    };
    budget
}
