//! Defaults seeded into every builder, beneath all other sources.

use crate::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::tree::DEFAULT_MAX_DEPTH;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("service.api_url", DEFAULT_API_URL)?
        .set_default("service.timeout_secs", DEFAULT_TIMEOUT_SECS)?
        .set_default("tree.max_depth", DEFAULT_MAX_DEPTH as u64)?
        .set_default("selection.unsaved_policy", "discard")
}
