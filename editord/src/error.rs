//! Host error types

use crate::config::ConfigError;
use crate::script::ScriptError;
use editor_core::EditError;
use std::path::PathBuf;
use thiserror::Error;

/// Host error types
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Host result
pub type HostResult<T> = Result<T, HostError>;

/// Reads a UTF-8 file, tagging failures with the path
pub fn read_text(path: &std::path::Path) -> HostResult<String> {
    std::fs::read_to_string(path).map_err(|source| HostError::Read {
        path: path.to_path_buf(),
        source,
    })
}
