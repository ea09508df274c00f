//! Load-once holder for the active configuration
//!
//! A holder moves from unloaded to loaded exactly once. Failed loads leave it
//! unloaded, so startup can report the error and abort without a half-built
//! configuration ever becoming visible.

use crate::{DeploymentTarget, EnvironmentConfig};
use coffeeshop_common::{ConfigurationError, NotInitializedError};
use once_cell::sync::OnceCell;
use std::path::Path;
use tracing::warn;

static GLOBAL: ConfigHolder = ConfigHolder::new();

#[derive(Debug)]
struct Loaded {
    target: DeploymentTarget,
    config: EnvironmentConfig,
}

/// Publishes one validated [`EnvironmentConfig`] to any number of readers
#[derive(Debug, Default)]
pub struct ConfigHolder {
    cell: OnceCell<Loaded>,
}

impl ConfigHolder {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Load the named target and publish it
    pub fn load(&self, target: &str) -> Result<&EnvironmentConfig, ConfigurationError> {
        let target: DeploymentTarget = target.parse()?;
        self.load_for(target, None)
    }

    /// Load a target, reading `path` instead of `coffeeshop.toml` when given
    pub fn load_for(
        &self,
        target: DeploymentTarget,
        path: Option<&Path>,
    ) -> Result<&EnvironmentConfig, ConfigurationError> {
        self.ensure_unloaded()?;
        let config = EnvironmentConfig::load_for(target, path)?;
        self.publish(target, config)
    }

    /// Publish an already built configuration after validating it for `target`
    pub fn initialize(
        &self,
        target: DeploymentTarget,
        config: EnvironmentConfig,
    ) -> Result<&EnvironmentConfig, ConfigurationError> {
        self.ensure_unloaded()?;
        config.validate_for(target)?;
        self.publish(target, config)
    }

    /// The published configuration
    pub fn get(&self) -> Result<&EnvironmentConfig, NotInitializedError> {
        self.cell
            .get()
            .map(|loaded| &loaded.config)
            .ok_or(NotInitializedError)
    }

    /// Target of the published configuration, if any
    pub fn target(&self) -> Option<DeploymentTarget> {
        self.cell.get().map(|loaded| loaded.target)
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    fn ensure_unloaded(&self) -> Result<(), ConfigurationError> {
        match self.cell.get() {
            Some(loaded) => Err(already_loaded(loaded)),
            None => Ok(()),
        }
    }

    fn publish(
        &self,
        target: DeploymentTarget,
        config: EnvironmentConfig,
    ) -> Result<&EnvironmentConfig, ConfigurationError> {
        // Two racing loaders: the first to publish wins, the other is refused
        let mut published = false;
        let loaded = self.cell.get_or_init(|| {
            published = true;
            Loaded { target, config }
        });

        if !published {
            warn!("Refusing to replace configuration for target {}", loaded.target);
            return Err(already_loaded(loaded));
        }
        Ok(&loaded.config)
    }
}

fn already_loaded(loaded: &Loaded) -> ConfigurationError {
    ConfigurationError::AlreadyLoaded {
        target: loaded.target.to_string(),
    }
}

/// Load the named target into the process-wide holder
///
/// Call once during startup, before spawning readers. On error nothing is
/// published and the error should abort startup.
pub fn load(target: &str) -> Result<&'static EnvironmentConfig, ConfigurationError> {
    GLOBAL.load(target)
}

/// Load into the process-wide holder, reading `path` instead of `coffeeshop.toml`
pub fn load_from(
    target: DeploymentTarget,
    path: Option<&Path>,
) -> Result<&'static EnvironmentConfig, ConfigurationError> {
    GLOBAL.load_for(target, path)
}

/// The process-wide configuration published by [`load`]
pub fn get() -> Result<&'static EnvironmentConfig, NotInitializedError> {
    GLOBAL.get()
}
