//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::DeskfsConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the user config file and environment.
    pub fn load() -> Result<DeskfsConfig, ConfigError> {
        MergeService::load()
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<DeskfsConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
