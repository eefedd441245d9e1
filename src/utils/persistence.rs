use std::{fs, path::Path};

use tracing::info;

use cashflow_domain::BudgetConfig;

use crate::errors::CashflowError;

/// Loads a budget from disk and checks it before any projection sees it.
pub fn load_budget_from_file(path: &Path) -> Result<BudgetConfig, CashflowError> {
    let data = fs::read_to_string(path)?;
    let budget: BudgetConfig = serde_json::from_str(&data)?;
    budget.validate()?;
    info!(path = %path.display(), rules = budget.rule_count(), "loaded budget");
    Ok(budget)
}

/// Writes the budget atomically by staging to a temporary file.
pub fn save_budget_to_file(budget: &BudgetConfig, path: &Path) -> Result<(), CashflowError> {
    budget.validate()?;
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(budget)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}
