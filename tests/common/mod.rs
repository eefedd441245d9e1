#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Budget starting on a Monday with a paycheck, rent on the 3rd and a
/// one-time purchase. Rent drives the balance negative on 2025-09-03.
pub const SEPTEMBER_BUDGET: &str = r#"{
    "initialBalance": 400,
    "projectionMonths": 1,
    "recurringIncomes": [
        {"label": "Library", "hoursPerWeek": 12, "hourlyRate": 16.25, "frequency": "weekly", "startDate": "2025-09-05"}
    ],
    "recurringExpenses": [
        {"label": "Rent share", "amount": 525, "dayOfMonth": 3}
    ],
    "oneTimeExpenses": [
        {"label": "Textbooks", "amount": 140.5, "date": "2025-09-02"}
    ],
    "foodBudget": {"enabled": true, "breakfast": 2, "lunch": 7, "dinner": 9, "snacks": 1, "weekendDailyTotal": 25}
}"#;

/// Creates an isolated directory that is cleaned up when the test binary exits.
pub fn test_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn write_budget(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).expect("write budget");
    path
}

/// CLI invocation isolated from the user's real configuration and colours.
pub fn cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cashflow_cli").expect("binary built");
    cmd.env("CASHFLOW_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}
