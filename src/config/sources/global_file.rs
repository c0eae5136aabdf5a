//! Global config file source: `$XDG_CONFIG_HOME/commitly/config.toml`

use crate::config::paths::xdg_root;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of the global file, if a config home can be determined.
pub fn path() -> Option<PathBuf> {
    match xdg_root::global_config_path() {
        Ok(path) => Some(path),
        Err(e) => {
            debug!(error = %e, "Skipping global config file");
            None
        }
    }
}

/// Add the global file to builder. A missing file is not an error.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(File::from(path).required(false)))
}
