//! Error types for the jsondir tree engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving or mutating key paths inside a tree
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A segment could not be resolved; carries the prefix consumed so far,
    /// including the failing segment.
    #[error("bad path: {prefix}")]
    BadPath { prefix: String },

    #[error("bad type: '{path}'; got '{actual}', expected '{expected}'")]
    BadType {
        path: String,
        actual: &'static str,
        expected: String,
    },

    #[error("invalid path segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },
}

impl PathError {
    pub(crate) fn bad_path<S: AsRef<str>>(segments: &[S]) -> Self {
        PathError::BadPath {
            prefix: crate::tree::path::join_for_display(segments),
        }
    }
}

/// Errors raised while reading, writing or ingesting JSON files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("root isn't a map: {} holds a {actual}", file.display())]
    RootNotAMap { file: PathBuf, actual: &'static str },

    #[error("{} is not located under {}", file.display(), base.display())]
    OutsideBase { file: PathBuf, base: PathBuf },

    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decoding {}:{line}:{column}: {source}", path.display())]
    Decode {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("walking {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("encoding: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("creating {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "neither {} nor {} could be loaded:\n{file_error}\n{dir_error}",
        file.display(),
        dir.display()
    )]
    NotFound {
        file: PathBuf,
        dir: PathBuf,
        file_error: Box<LoadError>,
        dir_error: Box<LoadError>,
    },
}

impl LoadError {
    /// True when the failure only means the file or directory does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            LoadError::Read { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            // Only the walk root going missing means "no such directory".
            LoadError::Walk { source, .. } => {
                source.depth() == 0
                    && source
                        .io_error()
                        .map(|e| e.kind() == std::io::ErrorKind::NotFound)
                        .unwrap_or(false)
            }
            LoadError::NotFound { .. } => true,
            _ => false,
        }
    }
}

/// Application-level errors surfaced by the CLI, configuration and logging layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
