//! # Editor Host
//!
//! Host runtime around the editing core.
//!
//! ## Responsibilities
//!
//! The host:
//! - Loads configuration and the word list from storage, once
//! - Shares the loaded dictionary with every session it opens
//! - Runs line-based edit scripts against a session
//! - Records every executed command into a structured session log
//! - Times repeated operations for the benchmark cases
//!
//! ## Non-Responsibilities
//!
//! The host does NOT:
//! - Persist documents or history
//! - Share a session between threads
//! - Retry failed commands

pub mod bench;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod runtime;
pub mod script;

pub use bench::{run_all, run_case, BenchCase, BenchReport};
pub use config::{load_config, parse_config, ConfigError, HostConfig};
pub use dictionary::{load_word_list, DEFAULT_WORD_LIST};
pub use error::{read_text, HostError, HostResult};
pub use runtime::{HostRuntime, StepReport};
pub use script::{EditScript, ScriptError, ScriptStep};
