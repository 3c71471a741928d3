//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, LoadError};

/// Map domain errors to a one-line-per-cause string for stderr.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Load(LoadError::NotFound { file, dir, .. }) => format!(
            "Error: entry point not found: neither {} nor {} exists",
            file.display(),
            dir.display()
        ),
        ApiError::Load(load) => format!("Error: {}", load),
        ApiError::Path(path) => format!("Error: {}", path),
        ApiError::ConfigError(_) | ApiError::InvalidArgument(_) => e.to_string(),
    }
}
