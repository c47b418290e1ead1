//! Service Configuration Module
//!
//! Provides server settings loaded from a TOML file, replacing hardcoded
//! bind/CORS values with operator-tunable ones.
//!
//! ## Loading Order
//!
//! 1. `--config` flag / `STRATAGEM_CONFIG` environment variable (path to TOML file)
//! 2. `stratagem.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The configuration is constructed once at startup and passed by value into
//! the router builder — there is no process-global configuration state.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level service configuration.
///
/// ```toml
/// [server]
/// addr = "0.0.0.0:8080"
/// cors_origins = ["http://localhost:5173"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, host:port
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Allowed CORS origins; empty means same-origin only
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// Config file picked up from the working directory when no explicit path
    /// is given.
    pub const DEFAULT_PATH: &'static str = "stratagem.toml";

    /// Load configuration per the documented loading order.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(explicit) => Self::from_file(explicit),
            None => {
                let implicit = Path::new(Self::DEFAULT_PATH);
                if implicit.exists() {
                    Self::from_file(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
