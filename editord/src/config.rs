//! Host configuration
//!
//! Configuration is a versioned JSON document. Every field is optional and
//! falls back to [`HostConfig::default`]; command-line flags are applied on
//! top by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::dictionary::DEFAULT_WORD_LIST;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Version of the config format (for future migrations)
    pub version: u32,
    /// Word list used for the misspelling count
    pub dictionary_path: PathBuf,
    /// Optional edit script to run against the document
    pub script_path: Option<PathBuf>,
    /// Iterations per benchmark case (0 = no benchmark)
    pub bench_iterations: usize,
    /// Keep debug-level log entries and print the log
    pub verbose: bool,
    /// Print the final session snapshot as JSON
    pub snapshot: bool,
}

impl HostConfig {
    /// Current version of the config format
    pub const CURRENT_VERSION: u32 = 1;
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            dictionary_path: PathBuf::from(DEFAULT_WORD_LIST),
            script_path: None,
            bench_iterations: 0,
            verbose: false,
            snapshot: false,
        }
    }
}

/// Parses configuration from JSON bytes
pub fn parse_config(bytes: &[u8]) -> Result<HostConfig, ConfigError> {
    let config: HostConfig =
        serde_json::from_slice(bytes).map_err(|e| ConfigError::Parse(e.to_string()))?;

    // Check version compatibility
    if config.version != HostConfig::CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion(config.version));
    }

    Ok(config)
}

/// Loads configuration from a JSON file
pub fn load_config(path: &Path) -> Result<HostConfig, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&bytes)
}
