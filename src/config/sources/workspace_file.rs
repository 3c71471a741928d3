//! Working-directory config file source: ./jsondir.toml

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const WORKSPACE_CONFIG_FILE: &str = "jsondir.toml";

pub fn workspace_config_path(dir: &Path) -> PathBuf {
    dir.join(WORKSPACE_CONFIG_FILE)
}

/// Add `<dir>/jsondir.toml` to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_config_path(dir);
    if !path.exists() {
        return Ok(builder);
    }
    Ok(builder.add_source(File::from(path.as_path()).required(false)))
}
