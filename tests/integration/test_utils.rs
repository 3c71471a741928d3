//! Shared test utilities for integration tests
//!
//! Fixture builders for JSON directories.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory populated with JSON fragments
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write `value` as JSON at `rel`, creating parent directories.
    pub fn json(&self, rel: &str, value: Value) -> &Self {
        self.raw(rel, &value.to_string())
    }

    /// Write raw text at `rel`, creating parent directories.
    pub fn raw(&self, rel: &str, content: &str) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    pub fn dir(&self, rel: &str) -> &Self {
        std::fs::create_dir_all(self.path(rel)).unwrap();
        self
    }

    /// Create a symlink at `rel` pointing to the fixture path `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, rel: &str) -> &Self {
        let link = self.path(rel);
        if let Some(parent) = link.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::os::unix::fs::symlink(self.path(target), link).unwrap();
        self
    }
}
