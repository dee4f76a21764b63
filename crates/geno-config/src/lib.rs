//! # geno-config
//!
//! Layered configuration loading for genofhir using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GENOFHIR_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`, or project-level `.genofhir/config.toml`
//! 3. User-level `~/.config/genofhir/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GENOFHIR_CONVERT__PRETTY` -> `convert.pretty`,
//! `GENOFHIR_LOG__LEVEL` -> `log.level`, etc. `GENOFHIR_LOG` itself is the
//! tracing filter read by the binary and is not a config key.
//!
//! # Usage
//!
//! ```no_run
//! use geno_config::GenoConfig;
//!
//! let config = GenoConfig::load_with_dotenv().expect("config");
//! if config.convert.pretty {
//!     println!("bundles are pretty-printed");
//! }
//! ```

mod convert;
mod error;
mod log;

pub use convert::ConvertConfig;
pub use error::ConfigError;
pub use log::LogConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for config keys.
pub const ENV_PREFIX: &str = "GENOFHIR_";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "GENOFHIR_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenoConfig {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl GenoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with `path` standing in for the project-level file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, fails to parse, or a
    /// value is invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                reason: format!("'{}' is not a file", path.display()),
            });
        }
        let _ = dotenvy::dotenv();
        Self::from_figment(&Self::layered(Some(path.to_path_buf())))
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let local = PathBuf::from(".genofhir/config.toml");
        Self::layered(local.exists().then_some(local))
    }

    fn layered(project_file: Option<PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        if let Some(project_file) = project_file {
            figment = figment.merge(Toml::file(project_file));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]).split("__"))
    }

    fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no conversion can run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty extension or log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.convert.extension.trim_start_matches('.').trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "convert.extension".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log.level".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("genofhir").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GenoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn empty_extension_is_rejected() {
        let mut config = GenoConfig::default();
        config.convert.extension = ".".into();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "convert.extension")
        );
    }

    #[test]
    fn global_path_ends_in_genofhir() {
        if let Some(path) = GenoConfig::global_config_path() {
            assert!(path.ends_with("genofhir/config.toml"));
        }
    }
}
