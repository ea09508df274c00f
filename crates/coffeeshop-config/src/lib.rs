//! # Coffee Shop Config
//!
//! Deployment-specific settings for the Coffee Shop front end: the backend API
//! base URL and the authentication provider registration.
//!
//! A configuration is built for one named [`DeploymentTarget`], layered from a
//! compiled-in preset, an optional profile-nested TOML file and `COFFEESHOP_`
//! environment variables, then validated before anyone can read it.
//!
//! Consumers should take an [`EnvironmentConfig`] by reference at construction
//! time. The process-wide [`load`] / [`get`] pair exists for the startup path
//! that has to publish exactly one configuration per process.
//!
//! ```no_run
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = coffeeshop_config::load("development")?;
//!     assert!(!config.is_production);
//!
//!     let same = coffeeshop_config::get()?;
//!     assert_eq!(config, same);
//!     Ok(())
//! }
//! ```

pub mod auth;
mod de;
pub mod environment;
pub mod holder;
pub mod target;

pub use auth::AuthSettings;
pub use coffeeshop_common::{ConfigurationError, NotInitializedError};
pub use environment::{EnvironmentConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use holder::{get, load, load_from, ConfigHolder};
pub use target::DeploymentTarget;
