//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Delay '{field}' must be between 1 and {max} ms, got {actual}")]
    InvalidDelay {
        field: &'static str,
        max: u64,
        actual: u64,
    },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
