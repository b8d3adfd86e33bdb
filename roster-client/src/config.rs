//! Client configuration loading.
//!
//! Defaults point at the public demo directory; an optional TOML file and
//! `ROSTER_*` environment variables (a local `.env` file is honored) can
//! override them.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

const ENV_BASE_URL: &str = "ROSTER_BASE_URL";
const ENV_TIMEOUT: &str = "ROSTER_TIMEOUT_SECS";

/// Where and how the client talks to the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the resource collection endpoint.
    pub base_url: String,
    /// Transport timeout applied to every request, in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Failure while assembling the client configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ClientConfig {
    /// Load configuration: defaults, then the optional TOML file, then
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        // Make a local .env visible before reading overrides.
        dotenvy::dotenv().ok();

        let mut config = match path {
            Some(path) => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };

        if let Ok(value) = std::env::var(ENV_BASE_URL) {
            config.base_url = value;
        }
        if let Ok(value) = std::env::var(ENV_TIMEOUT) {
            config.timeout_secs = value.parse().map_err(|_| ConfigLoadError::InvalidEnv {
                key: ENV_TIMEOUT,
                value,
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; unset keys fall back to the defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigLoadError> {
        Ok(toml::from_str(raw)?)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        Url::parse(&self.base_url)
            .map_err(|_| ConfigLoadError::InvalidBaseUrl(self.base_url.clone()))?;
        Ok(())
    }
}
