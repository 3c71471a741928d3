//! Built-in defaults, the lowest configuration layer.

use crate::tree::path::DEFAULT_EXTENSION;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with the built-in defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("ingest.extension", DEFAULT_EXTENSION)?
        .set_default("ingest.merge_maps", true)?
        .set_default("ingest.append_arrays", false)?
        .set_default("ingest.force_through", false)?
        .set_default("ingest.follow_symlinks", false)?
        .set_default("ingest.ignore_patterns", Vec::<String>::new())?
        .set_default("output.pretty", false)
}
