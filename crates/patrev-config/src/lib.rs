//! # patrev-config
//!
//! Layered configuration loading for patrev using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PATREV_*` prefix, `__` as separator)
//! 2. Project-level `.patrev/config.toml`
//! 3. User-level `~/.config/patrev/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `PATREV_API__BASE_URL` -> `api.base_url`,
//! `PATREV_AUTH__USE_KEYRING` -> `auth.use_keyring`, etc.
//!
//! ```no_run
//! use patrev_config::PatrevConfig;
//!
//! let config = PatrevConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.normalized_base_url());
//! ```

mod api;
mod auth;
mod error;
mod general;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use auth::AuthConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "PATREV_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PatrevConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PatrevConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does NOT call `dotenvy`; use [`load_with_dotenv`](Self::load_with_dotenv)
    /// for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory (if any), then [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".patrev/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("patrev").join("config.toml"))
    }
}
