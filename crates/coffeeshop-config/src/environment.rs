//! Environment configuration and its layered sources

use crate::auth::{join, parse_absolute_url};
use crate::{AuthSettings, DeploymentTarget};
use coffeeshop_common::ConfigurationError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// File read from the working directory when no explicit path is given;
/// absent is fine and parent directories are never searched
pub const DEFAULT_CONFIG_FILE: &str = "coffeeshop.toml";

/// Prefix of environment variable overrides, nested with `__`
pub const ENV_PREFIX: &str = "COFFEESHOP_";

/// Settings for one deployment of the Coffee Shop front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Production vs. development behavior in consuming code
    pub is_production: bool,

    /// Base URL (scheme + host + port) of the backend API
    #[serde(deserialize_with = "crate::de::trimmed_string")]
    pub api_server_url: String,

    /// Authentication provider registration
    pub auth: AuthSettings,
}

impl EnvironmentConfig {
    /// Load the named target from its preset, `coffeeshop.toml` and the environment
    pub fn load(target: &str) -> Result<Self, ConfigurationError> {
        let target: DeploymentTarget = target.parse()?;
        Self::load_for(target, None)
    }

    /// Load a target, reading `path` instead of `coffeeshop.toml` when given
    pub fn load_for(target: DeploymentTarget, path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let figment = Self::figment(target, path)?;
        Self::from_figment(target, &figment)
    }

    /// Layered sources for `target`, lowest priority first
    pub fn figment(target: DeploymentTarget, path: Option<&Path>) -> Result<Figment, ConfigurationError> {
        let mut figment = Figment::from(Serialized::defaults(target.preset()));

        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigurationError::ParseError {
                        details: format!("Configuration file not found: {}", p.display()),
                    });
                }
                debug!("Reading configuration file {}", p.display());
                figment = figment.merge(Toml::file_exact(p).nested());
            }
            None => {
                if Path::new(DEFAULT_CONFIG_FILE).exists() {
                    debug!("Reading configuration file {}", DEFAULT_CONFIG_FILE);
                }
                figment = figment.merge(Toml::file_exact(DEFAULT_CONFIG_FILE).nested());
            }
        }

        Ok(figment
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .ignore(&["target"])
                    .split("__")
                    .global(),
            )
            .select(target.as_str()))
    }

    /// Extract and validate a configuration for `target` from arbitrary sources
    pub fn from_figment(target: DeploymentTarget, figment: &Figment) -> Result<Self, ConfigurationError> {
        let config: Self = figment.extract().map_err(|e| ConfigurationError::ParseError {
            details: e.to_string(),
        })?;

        config.validate_for(target)?;

        info!(
            target_name = %target,
            api_server_url = %config.api_server_url,
            "Loaded environment configuration"
        );
        Ok(config)
    }

    /// Check every field, independent of the target that produced it
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_absolute_url("api_server_url", &self.api_server_url)?;
        self.auth.validate()
    }

    /// Check every field and that the production flag agrees with `target`
    pub fn validate_for(&self, target: DeploymentTarget) -> Result<(), ConfigurationError> {
        self.validate()?;

        if self.is_production != target.is_production() {
            return Err(ConfigurationError::invalid(
                "is_production",
                self.is_production.to_string(),
                format!("target '{target}' requires is_production = {}", target.is_production()),
            ));
        }

        Ok(())
    }

    /// Absolute URL of an API route, resolved below `api_server_url`
    pub fn api_endpoint(&self, path: &str) -> Result<Url, ConfigurationError> {
        let base = parse_absolute_url("api_server_url", &self.api_server_url)?;
        join(&base, path, "api_server_url")
    }

    /// Default tracing filter for `crate_name` in this deployment
    pub fn default_log_filter(&self, crate_name: &str) -> String {
        let level = if self.is_production { "warn" } else { "debug" };
        format!("{crate_name}={level}")
    }

    /// Generate an example `coffeeshop.toml` holding every preset
    pub fn generate_example() -> Result<String, ConfigurationError> {
        let profiles: BTreeMap<&str, EnvironmentConfig> = DeploymentTarget::ALL
            .iter()
            .map(|t| (t.as_str(), t.preset()))
            .collect();

        toml::to_string_pretty(&profiles).map_err(|e| ConfigurationError::ParseError {
            details: format!("Failed to serialize config: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_development_preset_values() {
        let config = DeploymentTarget::Development.preset();
        assert_eq!(config.api_server_url, "http://127.0.0.1:5000");
        assert_eq!(config.auth.domain_prefix, "mapfdev.us");
        assert_eq!(config.auth.audience, "coffeeapp");
        assert_eq!(config.auth.client_id, "CDWsr2U0UV7IjKzLdjKihi9OPqIy4XR5");
        assert_eq!(config.auth.callback_url, "http://localhost:8100");
        assert!(!config.is_production);
    }

    #[test]
    fn test_unparsable_api_url_is_rejected() {
        let mut config = DeploymentTarget::Development.preset();
        config.api_server_url = "not a url".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidField { ref field, ref value, .. }
                if field == "api_server_url" && value == "not a url"
        ));
    }

    #[test]
    fn test_empty_api_url_is_missing() {
        let mut config = DeploymentTarget::Production.preset();
        config.api_server_url = String::new();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigurationError::missing("api_server_url")
        );
    }

    #[test]
    fn test_api_url_with_surrounding_whitespace_is_rejected() {
        let mut config = DeploymentTarget::Development.preset();
        config.api_server_url = " http://127.0.0.1:5000 ".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidField { ref field, .. } if field == "api_server_url"
        ));
        assert!(config.api_endpoint("drinks").is_err());
    }

    #[test]
    fn test_production_flag_must_match_target() {
        let config = DeploymentTarget::Development.preset();
        config.validate().unwrap();

        let err = config.validate_for(DeploymentTarget::Production).unwrap_err();
        assert_eq!(err.field(), Some("is_production"));
    }

    #[test]
    fn test_api_endpoint() {
        let config = DeploymentTarget::Development.preset();
        assert_eq!(
            config.api_endpoint("/drinks-detail").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks-detail"
        );

        let mut nested = config.clone();
        nested.api_server_url = "https://example.com/api".to_string();
        assert_eq!(
            nested.api_endpoint("drinks/1").unwrap().as_str(),
            "https://example.com/api/drinks/1"
        );
    }

    #[test]
    fn test_default_log_filter() {
        assert_eq!(
            DeploymentTarget::Development
                .preset()
                .default_log_filter("coffeeshop_cli"),
            "coffeeshop_cli=debug"
        );
        assert_eq!(
            DeploymentTarget::Production
                .preset()
                .default_log_filter("coffeeshop_cli"),
            "coffeeshop_cli=warn"
        );
    }

    #[test]
    fn test_generate_example_parses_back() {
        let example = EnvironmentConfig::generate_example().unwrap();
        let parsed: BTreeMap<String, EnvironmentConfig> = toml::from_str(&example).unwrap();

        assert_eq!(parsed["development"], DeploymentTarget::Development.preset());
        assert_eq!(parsed["production"], DeploymentTarget::Production.preset());
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(DeploymentTarget::Development.preset()).unwrap();
        assert_eq!(value["api_server_url"], "http://127.0.0.1:5000");
        assert_eq!(value["auth"]["client_id"], "CDWsr2U0UV7IjKzLdjKihi9OPqIy4XR5");
        assert_eq!(value["is_production"], false);
    }
}
