//! CLI route: single route table and run context.

use crate::cli::parse::Commands;
use crate::codec::{to_json_string, write_value};
use crate::config::{ConfigLoader, JsondirConfig};
use crate::error::ApiError;
use crate::ingest::Ingestor;
use crate::tree::path::KeyPath;
use crate::tree::{get_ref, set_with_policy, MergePolicy, Tree};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Runtime context for CLI execution: resolved configuration and the ingestor
/// built from it.
pub struct RunContext {
    config: JsondirConfig,
    ingestor: Ingestor,
}

impl RunContext {
    /// Create run context from the working directory and optional config path.
    pub fn new(workspace: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace)?,
        };
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: JsondirConfig) -> Self {
        let ingestor = Ingestor::with_config(config.to_ingest_config());
        Self { config, ingestor }
    }

    pub fn config(&self) -> &JsondirConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command.name(),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Dump {
                entry,
                pretty,
                output,
            } => self.handle_dump(entry, *pretty, output.as_deref()),
            Commands::Get { entry, key, pretty } => self.handle_get(entry, key, *pretty),
            Commands::Set {
                entry,
                key,
                value,
                output,
                append_arrays,
                force_through,
                no_merge_maps,
                pretty,
            } => {
                let mut policy = self.config.ingest.policy();
                if *append_arrays {
                    policy |= MergePolicy::APPEND_ARRAYS;
                }
                if *force_through {
                    policy |= MergePolicy::FORCE_THROUGH;
                }
                if *no_merge_maps {
                    policy = MergePolicy::from_flags(
                        false,
                        policy.contains(MergePolicy::APPEND_ARRAYS),
                        policy.contains(MergePolicy::FORCE_THROUGH),
                    );
                }
                self.handle_set(entry, key, value, output, policy, *pretty)
            }
        }
    }

    fn pretty(&self, flag: bool) -> bool {
        flag || self.config.output.pretty
    }

    fn handle_dump(
        &self,
        entry: &Path,
        pretty: bool,
        output: Option<&Path>,
    ) -> Result<String, ApiError> {
        let tree = self.ingestor.load_entry_point(entry)?;
        match output {
            Some(path) => {
                write_value(path, &tree, self.pretty(pretty))?;
                Ok(format!("Wrote {} top-level keys to {}", tree.len(), path.display()))
            }
            None => Ok(to_json_string(&tree, self.pretty(pretty))?),
        }
    }

    fn handle_get(&self, entry: &Path, key: &str, pretty: bool) -> Result<String, ApiError> {
        let path = self.parse_key(key)?;
        let tree = self.ingestor.load_entry_point(entry)?;
        let value = get_ref(&tree, path.segments())?;
        Ok(to_json_string(value, self.pretty(pretty))?)
    }

    fn handle_set(
        &self,
        entry: &Path,
        key: &str,
        raw_value: &str,
        output: &Path,
        policy: MergePolicy,
        pretty: bool,
    ) -> Result<String, ApiError> {
        let path = self.parse_key(key)?;
        if path.is_empty() {
            return Err(ApiError::InvalidArgument(
                "key path cannot be empty".to_string(),
            ));
        }
        let value: Value = serde_json::from_str(raw_value).map_err(|e| {
            ApiError::InvalidArgument(format!("value is not valid JSON: {}", e))
        })?;

        let mut tree: Tree = self.ingestor.load_entry_point(entry)?;
        set_with_policy::<Value, _>(&mut tree, path.segments(), value, policy)?;
        write_value(output, &tree, self.pretty(pretty))?;

        Ok(format!(
            "Set {} ({}) and wrote {}",
            path,
            policy,
            output.display()
        ))
    }

    fn parse_key(&self, key: &str) -> Result<KeyPath, ApiError> {
        Ok(KeyPath::parse_dotted_with_extension(
            key,
            &self.config.ingest.extension,
        )?)
    }
}
