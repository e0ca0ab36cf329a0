//! # tob-config
//!
//! Layered configuration loading for the Tour of Beam content tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TOB_*` prefix, `__` as separator)
//! 2. Project-level `.tob/config.toml`
//! 3. User-level `~/.config/tob/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TOB_DATASTORE__PROJECT_ID` -> `datastore.project_id`,
//! `TOB_GENERAL__DEFAULT_SDK` -> `general.default_sdk`, etc.
//!
//! The Datastore namespace is not configurable: every entity lives in the
//! `Playground` namespace.
//!
//! # Usage
//!
//! ```no_run
//! use tob_config::TobConfig;
//!
//! let config = TobConfig::load_with_dotenv().expect("config");
//!
//! if config.datastore.is_configured() {
//!     println!("Datastore project: {}", config.datastore.project_id);
//! }
//! ```

mod datastore;
mod error;
mod general;

pub use datastore::DatastoreConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TobConfig {
    #[serde(default)]
    pub datastore: DatastoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TobConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed or a value has
    /// the wrong type (e.g. an unknown SDK name).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing `.env` is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".tob/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TOB_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tob").join("config.toml"))
    }
}
