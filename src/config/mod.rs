//! Configuration
//!
//! Layered settings for the browser: built-in defaults, the global
//! `config.toml`, an optional explicit file, then `COMMITLY__*` environment
//! variables (highest precedence).

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::selection::UnsavedPolicy;
use crate::tree::{TreeBuilder, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use facade::ConfigLoader;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitlyConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Content service endpoint and credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bearer token. Usually supplied through `--token` or `COMMITLY_TOKEN`.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Deepest accepted path, in segments.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default)]
    pub unsaved_policy: UnsavedPolicy,
}

impl CommitlyConfig {
    /// Reject settings that would only fail later, at first use.
    pub fn validate(&self) -> Result<(), ApiError> {
        let url = self.service.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ApiError::ConfigError(format!(
                "service.api_url must be an http(s) URL, got '{}'",
                self.service.api_url
            )));
        }
        if self.service.timeout_secs == 0 {
            return Err(ApiError::ConfigError(
                "service.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.tree.max_depth == 0 {
            return Err(ApiError::ConfigError(
                "tree.max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_secs)
    }

    pub fn tree_builder(&self) -> TreeBuilder {
        TreeBuilder::with_max_depth(self.tree.max_depth)
    }
}
