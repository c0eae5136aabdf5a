//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::CommitlyConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<CommitlyConfig, ConfigError> {
        MergeService::load()
    }

    /// Load configuration with `path` layered over the global file.
    pub fn load_from_file(path: &Path) -> Result<CommitlyConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> CommitlyConfig {
        CommitlyConfig::default()
    }
}
