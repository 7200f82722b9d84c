//! # genie-config
//!
//! Layered configuration loading for SpecGenie using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SPECGENIE_*` prefix, `__` as separator)
//! 2. Project-level `.specgenie/config.toml`
//! 3. User-level `~/.config/specgenie/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SPECGENIE_SERVER__PORT` -> `server.port`,
//! `SPECGENIE_EXPORT__FORMAT` -> `export.format`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use genie_config::GenieConfig;
//!
//! let config = GenieConfig::load_with_dotenv().expect("config");
//! println!("serving on {}", config.server.bind_addr());
//! ```

mod error;
mod export;
mod general;
mod server;

pub use error::ConfigError;
pub use export::{EXPORT_FORMATS, ExportConfig};
pub use general::GeneralConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project state directory.
pub const PROJECT_DIR: &str = ".specgenie";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "SPECGENIE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenieConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl GenieConfig {
    /// Load configuration from all sources, resolving the project-local file
    /// relative to the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`GenieConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for(None)
    }

    /// Load configuration, reading `.specgenie/config.toml` under `project_root`
    /// when given.
    ///
    /// # Errors
    ///
    /// See [`GenieConfig::load`].
    pub fn load_for(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`GenieConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain relative to the current directory.
    pub fn figment() -> Figment {
        Self::figment_for(None)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment_for(project_root: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_root.map_or_else(
            || PathBuf::from(PROJECT_DIR),
            |root| root.join(PROJECT_DIR),
        );
        let local_path = local_path.join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.export.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("specgenie").join("config.toml"))
    }
}
