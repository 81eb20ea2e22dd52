//! Server configuration.
//!
//! Loaded with figment from, in order of precedence (highest first):
//! 1. Command-line overrides
//! 2. Environment variables prefixed with `ALUMNI_`
//! 3. A TOML file (`alumni.toml` unless another path is given)
//! 4. Defaults

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "alumni.toml";

const ENV_PREFIX: &str = "ALUMNI_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(Box<figment::Error>),

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Socket address the HTTP server listens on
    pub bind: String,
    /// SQLite database file, created on first start
    pub database_path: PathBuf,
    /// Default tracing filter; `RUST_LOG` takes precedence when set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
            database_path: PathBuf::from("alumni.db"),
            log_level: "info".to_string(),
        }
    }
}

/// Values given on the command line. Unset fields leave lower layers untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from every source and validate it.
    pub fn load(config_file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let config_file = config_file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides));

        Self::from_figment(figment)
    }

    /// Extract and validate a configuration from an assembled figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;

        if self.database_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                message: "database_path must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind.parse().map_err(|_| ConfigError::Invalid {
            message: format!("bind is not a socket address: {}", self.bind),
        })
    }
}
