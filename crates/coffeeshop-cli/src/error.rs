//! Error types for the configuration CLI

use color_eyre::eyre::Report;
use thiserror::Error;

/// CLI error type with minimal variants
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown target, missing or malformed field
    #[error("Configuration error: {0}")]
    Config(#[from] coffeeshop_config::ConfigurationError),

    /// Configuration read before it was loaded
    #[error(transparent)]
    NotInitialized(#[from] coffeeshop_config::NotInitializedError),

    /// JSON rendering failures
    #[error("Failed to render JSON output")]
    Serialization(#[from] serde_json::Error),

    /// Everything else (using color-eyre's Report for rich errors)
    #[error(transparent)]
    Internal(#[from] Report),
}

impl CliError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(Report::msg(message.into()))
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
