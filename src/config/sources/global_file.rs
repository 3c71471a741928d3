//! Global config file source: $XDG_CONFIG_HOME/jsondir/config.toml, falling
//! back to ~/.config/jsondir/config.toml.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Path to the global config file, if a home directory can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "jsondir").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global config file at `path` to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: Option<&Path>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Some(path) = path else {
        return Ok(builder);
    };

    if !path.exists() {
        warn!(
            config_path = %path.display(),
            "Global configuration file not found, using built-in defaults"
        );
        return Ok(builder);
    }

    Ok(builder.add_source(File::from(path).required(false)))
}
