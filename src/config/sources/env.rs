//! Environment source: `JSONDIR__INGEST__EXTENSION=.data` sets `ingest.extension`.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};

pub const ENV_PREFIX: &str = "JSONDIR";
pub const ENV_SEPARATOR: &str = "__";

pub fn source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("ingest.ignore_patterns")
}

/// Add the environment layer, which overrides every file layer.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(source()))
}
