//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::request::TransferRequest;
use crate::config::schema::TransferFileConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to open config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field parsed but does not hold a usable value (bad key, bad URL).
    #[error("invalid `{field}` in config: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Load and deserialize configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<TransferFileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: TransferFileConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load the config file and turn it into a ready-to-use [`TransferRequest`].
pub fn load_request(path: &Path) -> Result<TransferRequest, ConfigError> {
    let config = load_config(path)?;
    tracing::debug!(config = ?config.transfer_config, "Configuration file decoded");
    TransferRequest::from_config(&config.transfer_config)
}
