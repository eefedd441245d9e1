use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use cashflow_domain::{MAX_PROJECTION_MONTHS, MIN_PROJECTION_MONTHS};

use crate::ConfigError;

/// Stores user-configurable front-end preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Display label only; projections use a single flat unit.
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_projection_months_value")]
    pub default_projection_months: u32,
    #[serde(default = "Config::default_color_output")]
    pub color_output: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_budget: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            default_projection_months: Self::default_projection_months_value(),
            color_output: Self::default_color_output(),
            last_opened_budget: None,
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_projection_months_value() -> u32 {
        6
    }

    pub fn default_color_output() -> bool {
        true
    }

    /// Checks settings whose type alone does not bound them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PROJECTION_MONTHS..=MAX_PROJECTION_MONTHS).contains(&self.default_projection_months)
        {
            return Err(ConfigError::InvalidSetting {
                key: "default_projection_months",
                reason: format!(
                    "{} is outside {}..={}",
                    self.default_projection_months, MIN_PROJECTION_MONTHS, MAX_PROJECTION_MONTHS
                ),
            });
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                key: "currency",
                reason: "must not be blank".into(),
            });
        }
        Ok(())
    }
}
