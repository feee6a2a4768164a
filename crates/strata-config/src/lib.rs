//! # strata-config
//!
//! Layered configuration loading for strata using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STRATA_*` prefix, `__` as separator)
//! 2. Project-level `<project>/strata.toml`
//! 3. User-level `~/.config/strata/config.toml`
//! 4. Built-in defaults
//!
//! CLI `--skip-*` flags are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! `STRATA_TOGGLES__DOMAIN=false` -> `toggles.domain`,
//! `STRATA_GENERAL__LOG_LEVEL=debug` -> `general.log_level`.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use strata_config::StrataConfig;
//!
//! let config = StrataConfig::load_with_dotenv(Path::new("shop")).expect("config");
//! if config.toggles.domain {
//!     println!("domain layer enabled");
//! }
//! ```

mod error;
mod general;
mod toggles;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use toggles::Toggles;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "strata.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StrataConfig {
    #[serde(default)]
    pub toggles: Toggles,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl StrataConfig {
    /// Load configuration for the project at `project_root`.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    /// `Figment` when a source fails to parse, `InvalidValue` when a value
    /// is out of range.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Load `.env` from the project root (or the current directory) first.
    ///
    /// # Errors
    /// See [`Self::load`].
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        } else {
            let _ = dotenvy::dotenv();
        }
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or merge extra providers.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = project_root.join(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("STRATA_").split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("strata").join("config.toml"))
    }
}
