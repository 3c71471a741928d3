//! Configuration loader: the one entry point that assembles the layers.

use super::defaults::builder_with_defaults;
use super::sources::{env, global_file, workspace_file};
use super::JsondirConfig;
use crate::error::ApiError;
use config::{Config, File};
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a run started in `dir`.
    ///
    /// Precedence, lowest first: built-in defaults, global config file,
    /// `<dir>/jsondir.toml`, `JSONDIR__*` environment variables.
    pub fn load(dir: &Path) -> Result<JsondirConfig, ApiError> {
        let global = global_file::global_config_path();
        Self::load_layers(global.as_deref(), dir)
    }

    /// Load with an explicit global file location (`None` skips that layer).
    pub fn load_layers(global: Option<&Path>, dir: &Path) -> Result<JsondirConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global)?;
        let builder = workspace_file::add_to_builder(builder, dir)?;
        let builder = env::add_to_builder(builder)?;

        let config: JsondirConfig = builder.build()?.try_deserialize()?;
        config.validate_or_error()?;
        debug!(dir = %dir.display(), "configuration loaded");
        Ok(config)
    }

    /// Load from one explicit file on top of the built-in defaults.
    ///
    /// The file must exist; no other file or environment layer is consulted.
    pub fn load_from_file(path: &Path) -> Result<JsondirConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let config: JsondirConfig = builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        config.validate_or_error()?;
        debug!(path = %path.display(), "configuration loaded from file");
        Ok(config)
    }

    /// Built-in defaults only.
    pub fn defaults() -> Result<JsondirConfig, ApiError> {
        let config: Config = builder_with_defaults()?.build()?;
        Ok(config.try_deserialize()?)
    }
}
