//! # forge-config
//!
//! Layered configuration loading for Thesis Forge using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FORGE_*` prefix, `__` as separator)
//! 2. Project-level `.forge/config.toml`
//! 3. User-level `~/.config/thesis-forge/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FORGE_API__THESIS_URL` -> `api.thesis_url`,
//! `FORGE_AUTH__LOGIN_TIMEOUT_SECS` -> `auth.login_timeout_secs`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use forge_config::ForgeConfig;
//!
//! let config = ForgeConfig::load_with_dotenv().expect("config");
//! if config.api.is_configured() {
//!     println!("Thesis endpoint: {}", config.api.thesis_url);
//! }
//! ```

mod api;
mod auth;
mod error;
mod general;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ForgeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (or the nearest ancestor found
    /// by dotenvy) before building the figment. The typical entry point for
    /// the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".forge/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FORGE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("thesis-forge").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unconfigured() {
        let config = ForgeConfig::default();
        assert!(!config.api.is_configured());
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: ForgeConfig = ForgeConfig::figment().extract()?;
            assert!(!config.api.is_configured());
            assert_eq!(config.auth.login_timeout_secs, 120);
            Ok(())
        });
    }
}
