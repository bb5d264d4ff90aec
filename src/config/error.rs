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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Log filter must not be empty")]
    EmptyLogFilter,

    #[error("Log filter '{filter}' is not a valid directive: {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("Tie tolerance must be finite, non-negative and below 1e-3, got {0}")]
    InvalidTieTolerance(f64),
}
