//! Single entry point that runs a projection and derives every analytic the
//! front ends display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use cashflow_domain::{BudgetConfig, DailySnapshot};

use crate::{
    analytics::{find_danger_date, find_lowest_balance, one_time_markers, EventMarker},
    error::ProjectionError,
    simulation::project,
    summary::{monthly_rollup, MonthlyTotals, ProjectionSummary},
    time::Clock,
};

/// A projection plus everything derived from it. `danger` and `lowest` are
/// copies of entries in `snapshots`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    pub today: NaiveDate,
    pub snapshots: Vec<DailySnapshot>,
    pub summary: ProjectionSummary,
    pub danger: Option<DailySnapshot>,
    pub lowest: Option<DailySnapshot>,
    pub months: Vec<MonthlyTotals>,
    pub markers: Vec<EventMarker>,
}

impl ProjectionReport {
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.snapshots.last().map(|snapshot| snapshot.date)
    }

    pub fn goes_negative(&self) -> bool {
        self.danger.is_some()
    }
}

pub struct ProjectionService;

impl ProjectionService {
    /// Projects `config` from an explicit anchor date.
    pub fn run(config: &BudgetConfig, today: NaiveDate) -> Result<ProjectionReport, ProjectionError> {
        let snapshots = project(config, today)?;
        let summary = ProjectionSummary::from_snapshots(config.initial_balance, &snapshots);
        let danger = find_danger_date(&snapshots).cloned();
        let lowest = find_lowest_balance(&snapshots).cloned();
        let months = monthly_rollup(&snapshots);
        let markers = one_time_markers(&snapshots);
        debug!(
            days = summary.days,
            ending_balance = summary.ending_balance,
            danger = ?danger.as_ref().map(|snapshot| snapshot.date),
            "projection report ready"
        );
        Ok(ProjectionReport {
            today,
            snapshots,
            summary,
            danger,
            lowest,
            months,
            markers,
        })
    }

    /// Projects `config` from whatever day `clock` reports.
    pub fn run_with_clock(
        config: &BudgetConfig,
        clock: &dyn Clock,
    ) -> Result<ProjectionReport, ProjectionError> {
        Self::run(config, clock.today())
    }
}
