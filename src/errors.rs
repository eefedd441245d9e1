use thiserror::Error;

use cashflow_config::ConfigError;
use cashflow_domain::ValidationError;
use cashflow_engine::ProjectionError;

/// Error type covering every failure the front end can surface.
#[derive(Debug, Error)]
pub enum CashflowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid budget: {0}")]
    Validation(#[from] ValidationError),
    #[error("Projection failed: {0}")]
    Projection(#[from] ProjectionError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Usage(String),
}
