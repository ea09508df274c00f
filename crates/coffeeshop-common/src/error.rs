//! Error types for configuration loading
//!
//! Both kinds are fatal at startup: they describe a build or deployment
//! mistake, never a transient condition, so callers propagate them to the
//! top of the application instead of retrying.

use thiserror::Error;

/// Raised while resolving, sourcing or validating a deployment configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The requested deployment target has no configuration
    #[error("Unknown deployment target '{target}' (expected one of: {expected})")]
    UnknownTarget { target: String, expected: String },

    /// A required field is absent or blank
    #[error("Missing required configuration field '{field}'")]
    MissingField { field: String },

    /// A field is present but malformed
    #[error("Invalid value '{value}' for configuration field '{field}': {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },

    /// A configuration source could not be read or extracted
    #[error("Configuration parse error: {details}")]
    ParseError { details: String },

    /// The process-wide configuration was already published
    #[error("Configuration already loaded for target '{target}'")]
    AlreadyLoaded { target: String },
}

impl ConfigurationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, when the error concerns a single field
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } | Self::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Raised when configuration is read before it has been loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Configuration has not been loaded; call load() during startup before reading it")]
pub struct NotInitializedError;
