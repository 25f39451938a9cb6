//! # Session Log
//!
//! This crate implements structured logging for editing sessions.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style.
//! The editing core never logs; hosts record what they executed into a
//! [`SessionLog`] they own and decide where the lines go.

use core_types::SessionId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Source session (if known)
    pub source: Option<SessionId>,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            source: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the source session
    pub fn with_source(mut self, source: SessionId) -> Self {
        self.source = Some(source);
        self
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    /// Looks up a field value by key
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Renders the entry as one line: `LEVEL [source] message key=value ...`
    pub fn render_line(&self) -> String {
        let mut line = format!("{:<5}", self.level.as_str());
        if let Some(source) = self.source {
            line.push_str(&format!(" [{}]", source));
        }
        line.push(' ');
        line.push_str(&self.message);
        for (key, value) in &self.fields {
            line.push_str(&format!(" {}={:?}", key, value));
        }
        line
    }
}

/// In-memory log sink
///
/// Entries below `min_level` are dropped on record.
#[derive(Debug, Clone)]
pub struct SessionLog {
    min_level: LogLevel,
    entries: Vec<LogEntry>,
}

impl SessionLog {
    /// Creates a sink keeping entries at `min_level` and above
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            min_level,
            entries: Vec::new(),
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Records an entry, returning whether it was kept
    pub fn record(&mut self, entry: LogEntry) -> bool {
        if entry.level < self.min_level {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries at `level` or above
    pub fn at_least(&self, level: LogLevel) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.level >= level)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}
