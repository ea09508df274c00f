use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use coffeeshop_config::{DeploymentTarget, EnvironmentConfig};
use std::path::PathBuf;
use tracing::debug;

/// Coffee Shop configuration inspector
#[derive(Parser, Debug)]
#[command(
    name = "coffeeshop-config",
    version,
    about = "Inspect and validate Coffee Shop deployment configuration",
    long_about = "Loads a deployment target from its built-in preset, coffeeshop.toml and
COFFEESHOP_* environment variables, validates it and prints the result.

EXAMPLES:
  coffeeshop-config show                       # Development settings as TOML
  coffeeshop-config -t production show --json  # Production settings as JSON
  coffeeshop-config validate                   # Fail fast on a bad configuration
  coffeeshop-config login-url                  # Auth0 authorize URL
  coffeeshop-config example > coffeeshop.toml  # Starting point for overrides"
)]
pub struct Args {
    /// Deployment target to load
    #[arg(
        short,
        long,
        global = true,
        env = "COFFEESHOP_TARGET",
        default_value = "development"
    )]
    pub target: String,

    /// Configuration file (defaults to ./coffeeshop.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Default tracing filter for the requested target
    ///
    /// An unknown target falls back to production verbosity here; the
    /// target error itself is reported by [`Args::run`].
    pub fn default_log_filter(&self) -> String {
        let level = self
            .target
            .parse::<DeploymentTarget>()
            .unwrap_or(DeploymentTarget::Production)
            .default_log_level();
        format!("coffeeshop_config={level},coffeeshop_cli={level}")
    }

    /// Execute the CLI command and return what should be printed
    pub fn run(self) -> Result<String> {
        match &self.command {
            Commands::Targets => handlers::targets::handle_targets(self.json),
            Commands::Example => handlers::targets::handle_example(),
            Commands::Show => handlers::config::handle_show(self.load()?, self.json),
            Commands::Validate => {
                let config = self.load()?;
                handlers::config::handle_validate(self.target()?, config, self.json)
            }
            Commands::LoginUrl { callback_path } => {
                handlers::config::handle_login_url(self.load()?, callback_path, self.json)
            }
        }
    }

    fn target(&self) -> Result<DeploymentTarget> {
        Ok(self.target.parse()?)
    }

    /// Publish the process-wide configuration and hand it to the handlers
    fn load(&self) -> Result<&'static EnvironmentConfig> {
        let target = self.target()?;
        debug!(
            "Loading target {} (config file: {:?})",
            target, self.config
        );
        coffeeshop_config::load_from(target, self.config.as_deref())?;
        Ok(coffeeshop_config::get()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["coffeeshop-config", "show"]).unwrap();
        assert_eq!(args.command, Commands::Show);
        assert!(args.config.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "coffeeshop-config",
            "validate",
            "--target",
            "production",
            "--config",
            "deploy/coffeeshop.toml",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.target, "production");
        assert_eq!(args.config, Some(PathBuf::from("deploy/coffeeshop.toml")));
        assert!(args.json);
        assert_eq!(
            args.default_log_filter(),
            "coffeeshop_config=warn,coffeeshop_cli=warn"
        );
    }

    #[test]
    fn test_login_url_callback_default() {
        let args = Args::try_parse_from(["coffeeshop-config", "login-url"]).unwrap();
        assert_eq!(
            args.command,
            Commands::LoginUrl {
                callback_path: "/tabs/user-page".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_target_fails_before_loading() {
        let args =
            Args::try_parse_from(["coffeeshop-config", "-t", "staging-typo", "validate"]).unwrap();
        let err = args.run().unwrap_err();
        assert!(err.to_string().contains("Unknown deployment target 'staging-typo'"));
    }

    #[test]
    fn test_targets_without_loading() {
        let args = Args::try_parse_from(["coffeeshop-config", "targets"]).unwrap();
        assert_eq!(args.run().unwrap(), "development\nproduction");
    }
}
