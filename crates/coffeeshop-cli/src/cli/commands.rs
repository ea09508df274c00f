use clap::Subcommand;
use coffeeshop_config::auth::DEFAULT_CALLBACK_PATH;

/// Main CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the validated configuration
    Show,

    /// Load and validate the configuration, then print a summary
    Validate,

    /// Print the Auth0 login URL the front end redirects to
    LoginUrl {
        /// Front-end route to return to after login
        #[arg(long, default_value = DEFAULT_CALLBACK_PATH)]
        callback_path: String,
    },

    /// List known deployment targets
    Targets,

    /// Print an example coffeeshop.toml with every preset
    Example,
}
