//! Configuration loading from the process environment.

use std::env::VarError;
use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{RelayConfig, DEFAULT_PORT};
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_API_KEY: &str = "TRIPADVISOR_API_KEY";
pub const ENV_PORT: &str = "TRIPADVISOR_PORT";
pub const ENV_METRICS_ADDR: &str = "TRIPADVISOR_METRICS_ADDR";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not valid unicode")]
    NotUnicode { name: &'static str },

    #[error("invalid port '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid metrics address '{value}': {source}")]
    InvalidMetricsAddress {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("failed to load dotenv file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load a dotenv file into the process environment.
///
/// With no explicit path, `./.env` is used and a missing file is ignored.
/// An explicit path must exist. Variables already set are never overridden.
pub fn load_dotenv(path: Option<&Path>) -> Result<(), ConfigError> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)?;
            tracing::debug!(path = %path.display(), "Loaded dotenv file");
        }
        None => match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded dotenv file"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        },
    }
    Ok(())
}

impl RelayConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let var = |name: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(name) {
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { name }),
            }
        };

        let mut config = RelayConfig::default();

        if let Some(key) = var(ENV_API_KEY)? {
            config = config.with_api_key(key);
        }

        config.port = match var(ENV_PORT)? {
            Some(value) => parse_port(&value)?,
            None => DEFAULT_PORT,
        };

        if let Some(value) = var(ENV_METRICS_ADDR)? {
            let addr = value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::InvalidMetricsAddress { value, source })?;
            config.metrics_address = Some(addr);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_config(self).map_err(ConfigError::Validation)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|source| ConfigError::InvalidPort {
            value: value.to_string(),
            source,
        })
}
