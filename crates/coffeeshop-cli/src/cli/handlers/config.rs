//! Handlers that print the loaded configuration

use crate::error::{CliError, Result};
use coffeeshop_config::{DeploymentTarget, EnvironmentConfig};
use serde_json::json;
use tracing::debug;

/// Handle the `show` command - print the validated configuration
pub fn handle_show(config: &EnvironmentConfig, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(config)?);
    }
    toml::to_string_pretty(config)
        .map_err(|e| CliError::internal(format!("Failed to render TOML output: {e}")))
}

/// Handle the `validate` command - summarize a configuration that passed validation
pub fn handle_validate(
    target: DeploymentTarget,
    config: &EnvironmentConfig,
    json: bool,
) -> Result<String> {
    let issuer = config.auth.issuer()?;
    let jwks_url = config.auth.jwks_url()?;
    debug!("Configuration for {} passed validation", target);

    if json {
        let summary = json!({
            "target": target.as_str(),
            "valid": true,
            "is_production": config.is_production,
            "api_server_url": config.api_server_url,
            "issuer": issuer.as_str(),
            "jwks_url": jwks_url.as_str(),
        });
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    Ok(format!(
        "Configuration for target '{target}' is valid\n  API server: {}\n  Issuer: {issuer}\n  Production: {}",
        config.api_server_url, config.is_production
    ))
}

/// Handle the `login-url` command - print the Auth0 authorize URL
pub fn handle_login_url(
    config: &EnvironmentConfig,
    callback_path: &str,
    json: bool,
) -> Result<String> {
    let url = config.auth.login_url(callback_path)?;
    if json {
        return Ok(serde_json::to_string_pretty(&json!({ "login_url": url.as_str() }))?);
    }
    Ok(url.to_string())
}
