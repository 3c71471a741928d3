//! Directory ingestion
//!
//! A JSON directory is a tree of `.json` fragments. Each file is decoded and
//! stored at the key path spelled by its location relative to the base
//! directory, minus the extension:
//!
//! ```text
//! db.json            -> top level of the tree (must hold an object)
//! db/server.json     -> server
//! db/server/tls.json -> server.tls
//! ```
//!
//! Entry points are loaded file first, directory second, so that `db/` can
//! override values from `db.json`.

pub mod walker;

use crate::codec::read_value;
use crate::error::LoadError;
use crate::tree::path::{
    is_root_marker, relative_to, split, strip_extension, strip_path_extension, validate_segment,
    DEFAULT_EXTENSION,
};
use crate::tree::{set_with_policy, type_name, MergePolicy, Tree};
use serde_json::Value;
use std::path::{is_separator, Path, PathBuf};
use tracing::{debug, info};
pub use walker::{Walker, WalkerConfig};

/// Ingestion settings
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Suffix stripped from file names to form the last key segment
    pub extension: String,
    /// Policy used to fold each file into the tree
    pub policy: MergePolicy,
    /// Directory traversal settings
    pub walker: WalkerConfig,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            policy: MergePolicy::DEFAULT,
            walker: WalkerConfig::default(),
        }
    }
}

/// The pair of locations checked for a user-supplied entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub dir: PathBuf,
    pub file: PathBuf,
}

/// Outcome of a directory ingestion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub files_stored: usize,
}

/// Folds JSON files into an in-memory tree
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    config: IngestConfig,
}

impl Ingestor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IngestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Store `value`, decoded from `file_path`, into `tree`.
    ///
    /// The root file (`file_path` minus extension names `base_dir` itself)
    /// must hold an object, which is unioned into the top level. Any other
    /// file lands at the key path derived from its location under `base_dir`.
    pub fn store_value(
        &self,
        base_dir: &Path,
        file_path: &Path,
        value: Value,
        tree: &mut Tree,
    ) -> Result<(), LoadError> {
        let ext = self.config.extension.as_str();

        if is_root_marker(base_dir, file_path, ext) {
            let map = match value {
                Value::Object(map) => map,
                other => {
                    return Err(LoadError::RootNotAMap {
                        file: file_path.to_path_buf(),
                        actual: type_name(&other),
                    })
                }
            };
            debug!(file = %file_path.display(), keys = map.len(), "storing root file");
            tree.extend(map);
            return Ok(());
        }

        let relative =
            relative_to(file_path, base_dir).ok_or_else(|| LoadError::OutsideBase {
                file: file_path.to_path_buf(),
                base: base_dir.to_path_buf(),
            })?;
        let segments = split(&strip_path_extension(&relative, ext));
        for segment in &segments {
            validate_segment(segment, ext)?;
        }

        debug!(
            file = %file_path.display(),
            key = %crate::tree::path::join_for_display(&segments),
            "storing file"
        );
        set_with_policy::<Value, _>(tree, &segments, value, self.config.policy)?;
        Ok(())
    }

    /// Decode the file at `file_path` and store it relative to `base_dir`.
    pub fn ingest_file(
        &self,
        base_dir: &Path,
        file_path: &Path,
        tree: &mut Tree,
    ) -> Result<(), LoadError> {
        let value = read_value(file_path)?;
        self.store_value(base_dir, file_path, value, tree)
    }

    /// Store every regular file found under `base_dir`.
    ///
    /// Stops at the first failure; files stored before it stay in `tree`.
    /// When two files land on the same scalar or array key, the one visited
    /// last wins (see [`Walker`] for the visiting order).
    pub fn ingest_directory(
        &self,
        base_dir: &Path,
        tree: &mut Tree,
    ) -> Result<IngestSummary, LoadError> {
        let walker = Walker::with_config(base_dir.to_path_buf(), self.config.walker.clone());
        let mut summary = IngestSummary::default();

        for file in walker.files() {
            let file = file?;
            self.ingest_file(base_dir, &file, tree)?;
            summary.files_stored += 1;
        }

        debug!(
            dir = %base_dir.display(),
            files = summary.files_stored,
            "ingested directory"
        );
        Ok(summary)
    }

    /// Compute the file and directory candidates for `input`.
    ///
    /// `db` checks `db.json` and `db/`; `db.json` checks `db.json` and `db/`.
    pub fn resolve_entry_point(&self, input: &Path) -> EntryPoint {
        let ext = self.config.extension.as_str();
        let raw = input.to_string_lossy();

        if !ext.is_empty() && raw.ends_with(ext) {
            let dir = strip_extension(raw.trim_end_matches(is_separator), ext);
            EntryPoint {
                dir: PathBuf::from(dir),
                file: input.to_path_buf(),
            }
        } else {
            EntryPoint {
                dir: input.to_path_buf(),
                file: PathBuf::from(format!("{}{}", raw, ext)),
            }
        }
    }

    /// Load the entry point `input` into a fresh tree.
    ///
    /// The file candidate is stored first, then the directory candidate, so
    /// directory content wins over file content at the same key. Either may
    /// be missing, but not both.
    pub fn load_entry_point(&self, input: &Path) -> Result<Tree, LoadError> {
        let entry = self.resolve_entry_point(input);
        let mut tree = Tree::new();

        let file_error = match self.ingest_file(&entry.dir, &entry.file, &mut tree) {
            Ok(()) => None,
            Err(e) if e.is_not_found() => {
                debug!(file = %entry.file.display(), "entry point file not found");
                Some(e)
            }
            Err(e) => return Err(e),
        };

        let (dir_error, summary) = match self.ingest_directory(&entry.dir, &mut tree) {
            Ok(summary) => (None, summary),
            // A missing file inside the directory is a real failure.
            Err(e @ LoadError::Walk { .. }) if e.is_not_found() => {
                debug!(dir = %entry.dir.display(), "entry point directory not found");
                (Some(e), IngestSummary::default())
            }
            Err(e) => return Err(e),
        };

        if let (Some(file_error), Some(dir_error)) = (file_error, dir_error) {
            return Err(LoadError::NotFound {
                file: entry.file,
                dir: entry.dir,
                file_error: Box::new(file_error),
                dir_error: Box::new(dir_error),
            });
        }

        info!(
            entry = %input.display(),
            files = summary.files_stored,
            keys = tree.len(),
            "loaded JSON directory"
        );
        Ok(tree)
    }
}

/// Load `path` with the default ingestion settings.
///
/// ```no_run
/// let tree = jsondir::load("config/db")?;
/// let port: i64 = jsondir::tree::get(&tree, &["server", "port"])?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load(path: impl AsRef<Path>) -> Result<Tree, LoadError> {
    Ingestor::new().load_entry_point(path.as_ref())
}
