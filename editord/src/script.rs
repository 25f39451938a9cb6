//! # Edit Script Parser
//!
//! Provides a simple scripted command format for deterministic runs and demos.
//!
//! ## Format
//!
//! Scripts are line-based, with each line holding one session command:
//! - Range commands: `delete 0 5`, `cut 0 5`, `copy 0 5`, `highlight 0 5`
//! - Paste: `paste 3`
//! - Bare commands: `text`, `undo`, `redo`, `misspellings`
//! - Comments: `# This is a comment`, also allowed after a command
//!
//! ## Example
//!
//! ```text
//! # Move the first word
//! cut 0 5        # clipboard = "Neeva"
//! paste 3
//! undo
//! ```

use editor_core::{parse_command, Command, CommandError};
use std::collections::VecDeque;
use thiserror::Error;

/// Edit script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Parse error at line {line}: {source}")]
    Parse { line: usize, source: CommandError },

    #[error("Empty script")]
    EmptyScript,
}

/// One command with the 1-based line it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: usize,
    pub command: Command,
}

/// Edit script
#[derive(Debug, Clone, Default)]
pub struct EditScript {
    steps: VecDeque<ScriptStep>,
}

impl EditScript {
    /// Creates a new empty edit script
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, ScriptError> {
        let mut steps = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = strip_comment(line).trim();
            if line.is_empty() {
                continue;
            }

            let command = parse_command(line).map_err(|source| ScriptError::Parse {
                line: line_num + 1,
                source,
            })?;
            steps.push_back(ScriptStep {
                line: line_num + 1,
                command,
            });
        }

        if steps.is_empty() {
            return Err(ScriptError::EmptyScript);
        }

        Ok(Self { steps })
    }

    /// Appends a command (line 0 marks commands not read from text)
    pub fn push(&mut self, command: Command) {
        self.steps.push_back(ScriptStep { line: 0, command });
    }

    /// Returns the next step, if any
    pub fn next_step(&mut self) -> Option<ScriptStep> {
        self.steps.pop_front()
    }

    /// Checks if there are more steps
    pub fn has_more(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Returns the number of remaining steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}
