//! Filesystem walker yielding the fragment files under a directory

use crate::error::LoadError;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// File or directory names to skip entirely (e.g. ".git")
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

/// Filesystem walker
///
/// Within each directory, regular files are visited before sub-directories,
/// each group in lexical order. Visiting `a.json` before `a/` lets the
/// directory content override the same-named file when both are merged into
/// one tree.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily yield every regular file under the root, in visiting order.
    ///
    /// The root itself is never yielded. An error for a missing root has
    /// depth 0, which callers use to tell "no such directory" apart from a
    /// failure inside the walk.
    pub fn files(&self) -> impl Iterator<Item = Result<PathBuf, LoadError>> + '_ {
        WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by(files_first)
            .into_iter()
            .filter_entry(move |entry| !self.should_ignore(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
                Ok(entry) if entry.path_is_symlink() && !points_to_dir(entry.path()) => {
                    Some(Ok(entry.into_path()))
                }
                Ok(_) => None,
                Err(source) => Some(Err(LoadError::Walk {
                    path: source
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone()),
                    source,
                })),
            })
    }

    /// Check if an entry's own name matches an ignore pattern
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| pattern.as_str() == name)
    }
}

/// Unfollowed symlinks are read through; only links to directories are
/// skipped. A dangling link is yielded so reading it reports the failure.
fn points_to_dir(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir
        .cmp(&b_dir)
        .then_with(|| a.file_name().cmp(b.file_name()))
}
