//! MergeService: orchestrates sources, applies merge policy, deserializes to CommitlyConfig.

use crate::config::sources::{environment, global_file};
use crate::config::CommitlyConfig;
use config::{ConfigError, File};
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> global file -> environment (highest).
    pub fn load() -> Result<CommitlyConfig, ConfigError> {
        Self::load_layers(global_file::path().as_deref(), None)
    }

    /// Precedence: defaults -> global file -> `path` -> environment.
    pub fn load_from_file(path: &Path) -> Result<CommitlyConfig, ConfigError> {
        Self::load_layers(global_file::path().as_deref(), Some(path))
    }

    pub(crate) fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<CommitlyConfig, ConfigError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        if let Some(global) = global {
            builder = global_file::add_to_builder(builder, global)?;
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
