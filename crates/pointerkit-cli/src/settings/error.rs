//! Configuration error types

use std::path::PathBuf;

use pointerkit::ToolkitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(PathBuf),

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid value for {key}: {source}")]
    Invalid {
        key: &'static str,
        source: ToolkitError,
    },
}
