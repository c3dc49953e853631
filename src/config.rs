//! Configuration
//!
//! `DeskfsConfig` is assembled with the `config` crate from built-in defaults,
//! the user config file under `$XDG_CONFIG_HOME/deskfs/`, and `DESKFS__*`
//! environment variables (highest precedence).

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::store::SNAPSHOT_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Effective configuration for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeskfsConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl DeskfsConfig {
    pub fn to_toml_string(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render configuration: {}", e)))
    }
}

fn default_snapshot_key() -> String {
    SNAPSHOT_KEY.to_string()
}

/// Snapshot store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory of the sled database; None means the XDG data directory
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Key the session snapshot is stored under
    #[serde(default = "default_snapshot_key")]
    pub snapshot_key: String,
}

impl StorageConfig {
    /// Resolve the store directory, falling back to `$XDG_DATA_HOME/deskfs/store`.
    pub fn resolve_store_path(&self) -> Result<PathBuf, ApiError> {
        match &self.store_path {
            Some(path) if !path.as_os_str().is_empty() => Ok(path.clone()),
            _ => xdg::default_store_dir(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            snapshot_key: default_snapshot_key(),
        }
    }
}
