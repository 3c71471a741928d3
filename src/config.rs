//! Configuration System
//!
//! Layered configuration for ingestion, output and logging. Layers are merged
//! by the `config` crate, lowest precedence first: built-in defaults, the
//! global config file, `./jsondir.toml`, then `JSONDIR__*` environment
//! variables. An explicit `--config` file replaces the file and environment
//! layers.

use crate::error::ApiError;
use crate::ingest::{IngestConfig, WalkerConfig};
use crate::logging::LoggingConfig;
use crate::tree::MergePolicy;
use serde::{Deserialize, Serialize};
use std::path::is_separator;

mod defaults;
mod facade;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsondirConfig {
    #[serde(default)]
    pub ingest: IngestSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How directories are folded into a tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSettings {
    /// Suffix of fragment files, stripped to form key segments
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_true")]
    pub merge_maps: bool,

    #[serde(default)]
    pub append_arrays: bool,

    /// Replace non-map intermediates instead of failing
    #[serde(default)]
    pub force_through: bool,

    #[serde(default)]
    pub follow_symlinks: bool,

    /// File or directory names skipped while walking
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_extension() -> String {
    crate::tree::path::DEFAULT_EXTENSION.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            merge_maps: true,
            append_arrays: false,
            force_through: false,
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
        }
    }
}

impl IngestSettings {
    pub fn policy(&self) -> MergePolicy {
        MergePolicy::from_flags(self.merge_maps, self.append_arrays, self.force_through)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(format!(
                "extension '{}' must start with '.' and name a suffix",
                self.extension
            ));
        }
        if self.extension.chars().any(is_separator) {
            return Err(format!(
                "extension '{}' cannot contain a path separator",
                self.extension
            ));
        }
        if self.ignore_patterns.iter().any(|p| p.is_empty()) {
            return Err("ignore patterns cannot be empty".to_string());
        }
        Ok(())
    }
}

/// How trees are rendered by the CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Pretty-print with tab indentation
    #[serde(default)]
    pub pretty: bool,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Ingest(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Ingest(msg) => write!(f, "Ingest: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl JsondirConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.ingest.validate() {
            errors.push(ValidationError::Ingest(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub(crate) fn validate_or_error(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// Ingestion settings in the form the ingestor takes.
    pub fn to_ingest_config(&self) -> IngestConfig {
        IngestConfig {
            extension: self.ingest.extension.clone(),
            policy: self.ingest.policy(),
            walker: WalkerConfig {
                follow_symlinks: self.ingest.follow_symlinks,
                ignore_patterns: self.ingest.ignore_patterns.clone(),
                max_depth: None,
            },
        }
    }
}
