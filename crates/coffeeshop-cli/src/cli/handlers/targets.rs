//! Handlers that work without loading a configuration

use crate::error::Result;
use coffeeshop_config::{DeploymentTarget, EnvironmentConfig};

/// Handle the `targets` command - list known deployment targets
pub fn handle_targets(json: bool) -> Result<String> {
    let names: Vec<&str> = DeploymentTarget::ALL.iter().map(|t| t.as_str()).collect();
    if json {
        return Ok(serde_json::to_string_pretty(&names)?);
    }
    Ok(names.join("\n"))
}

/// Handle the `example` command - print an example configuration file
pub fn handle_example() -> Result<String> {
    Ok(EnvironmentConfig::generate_example()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_json() {
        let output = handle_targets(true).unwrap();
        let names: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(names, vec!["development", "production"]);
    }

    #[test]
    fn test_example_has_a_table_per_target() {
        let output = handle_example().unwrap();
        assert!(output.contains("[development]"));
        assert!(output.contains("[production.auth]"));
    }
}
