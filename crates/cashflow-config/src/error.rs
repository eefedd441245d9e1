use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("config file {path} is not valid JSON: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("config could not be encoded: {0}")]
    Encode(String),

    #[error("setting `{key}` is invalid: {reason}")]
    InvalidSetting { key: &'static str, reason: String },
}
