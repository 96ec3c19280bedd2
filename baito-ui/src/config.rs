//! Application configuration.
//!
//! Loaded from an optional TOML file; every key has a default so an empty
//! file (or no file at all) is valid. Command-line flags are applied on top
//! with [`AppConfig::with_overrides`].
//!
//! ```toml
//! locale = "en"
//! currency_symbol = "￥"
//! log_level = "debug"
//! log_file = "baito.log"
//! sample_jobs = false
//! ```

use std::path::{Path, PathBuf};

use baito_core::Locale;
use baito_core::currency::DEFAULT_CURRENCY_SYMBOL;
use serde::Deserialize;
use thiserror::Error;
use tracing::error;

/// Log filter used when neither the config nor `RUST_LOG` names one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Language of labels and generated job names.
    pub locale: Locale,
    /// Glyph printed in front of amounts.
    pub currency_symbol: String,
    /// Bare level or full `EnvFilter` directive.
    pub log_level: String,
    /// Log records are appended here when set.
    pub log_file: Option<PathBuf>,
    /// Start with the two example jobs when no job file is given.
    pub sample_jobs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
            sample_jobs: true,
        }
    }
}

/// Values given on the command line, each replacing its config key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub locale: Option<Locale>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    /// Start without the example jobs.
    pub empty: bool,
}

impl AppConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| {
            error!(path = %path.display(), %source, "cannot read config file");
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::from_toml_str(&contents).map_err(|source| {
            error!(path = %path.display(), %source, "invalid config file");
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        self,
        overrides: ConfigOverrides,
    ) -> Self {
        Self {
            locale: overrides.locale.unwrap_or(self.locale),
            log_level: overrides.log_level.unwrap_or(self.log_level),
            log_file: overrides.log_file.or(self.log_file),
            sample_jobs: self.sample_jobs && !overrides.empty,
            ..self
        }
    }
}
