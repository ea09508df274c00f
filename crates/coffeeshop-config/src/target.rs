//! Deployment targets and their compiled-in presets

use crate::{AuthSettings, EnvironmentConfig};
use coffeeshop_common::ConfigurationError;
use std::fmt;
use std::str::FromStr;

/// Auth0 tenant shared by every preset
const AUTH0_DOMAIN_PREFIX: &str = "mapfdev.us";

/// Audience registered for the Coffee Shop API
const AUTH0_AUDIENCE: &str = "coffeeapp";

/// Public client ID of the Coffee Shop front end
const AUTH0_CLIENT_ID: &str = "CDWsr2U0UV7IjKzLdjKihi9OPqIy4XR5";

/// Named environment with its own configuration set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeploymentTarget {
    Development,
    Production,
}

impl DeploymentTarget {
    pub const ALL: [DeploymentTarget; 2] = [Self::Development, Self::Production];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Log level used when neither flags nor RUST_LOG say otherwise
    pub const fn default_log_level(&self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production => "warn",
        }
    }

    /// Comma separated list of accepted target names, for error messages
    pub fn expected_names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Compiled-in values for this target, before any file or environment override
    pub fn preset(&self) -> EnvironmentConfig {
        match self {
            Self::Development => EnvironmentConfig {
                is_production: false,
                api_server_url: "http://127.0.0.1:5000".to_string(),
                auth: AuthSettings {
                    domain_prefix: AUTH0_DOMAIN_PREFIX.to_string(),
                    audience: AUTH0_AUDIENCE.to_string(),
                    client_id: AUTH0_CLIENT_ID.to_string(),
                    callback_url: "http://localhost:8100".to_string(),
                },
            },
            // Placeholder hosts; real deployments override them through
            // coffeeshop.toml or COFFEESHOP_* variables
            Self::Production => EnvironmentConfig {
                is_production: true,
                api_server_url: "https://api.coffeeshop.example.com".to_string(),
                auth: AuthSettings {
                    domain_prefix: AUTH0_DOMAIN_PREFIX.to_string(),
                    audience: AUTH0_AUDIENCE.to_string(),
                    client_id: AUTH0_CLIENT_ID.to_string(),
                    callback_url: "https://coffeeshop.example.com".to_string(),
                },
            },
        }
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentTarget {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigurationError::UnknownTarget {
                target: s.to_string(),
                expected: Self::expected_names(),
            }),
        }
    }
}
