//! # Host Runtime
//!
//! Runs commands against one session and logs each outcome.

use editor_core::{Command, CommandOutcome, Dictionary, EditError, EditSession};
use session_log::{LogEntry, LogLevel, SessionLog};
use std::sync::Arc;

use crate::config::HostConfig;
use crate::script::EditScript;

/// Result of one executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Script line (0 for commands not read from a script)
    pub line: usize,
    pub command: Command,
    pub outcome: Result<CommandOutcome, EditError>,
}

impl StepReport {
    /// One-line summary for the host output
    pub fn summary(&self) -> String {
        let prefix = if self.line > 0 {
            format!("{:>4} {:<12}", self.line, self.command.name())
        } else {
            format!("{:<12}", self.command.name())
        };
        match &self.outcome {
            Ok(CommandOutcome::Text(text)) => format!("{} {:?}", prefix, text),
            Ok(CommandOutcome::Count(count)) => format!("{} {}", prefix, count),
            Ok(CommandOutcome::Unchanged) => format!("{} (nothing to report)", prefix),
            Err(err) => format!("{} error: {}", prefix, err),
        }
    }
}

/// Host runtime
pub struct HostRuntime {
    /// Editing session
    session: EditSession,
    /// Structured log of executed commands
    log: SessionLog,
    /// Step counter
    steps: usize,
}

impl HostRuntime {
    /// Creates a runtime over `document` with an already loaded dictionary
    pub fn new(
        config: &HostConfig,
        document: impl Into<String>,
        dictionary: Arc<dyn Dictionary>,
    ) -> Self {
        let min_level = if config.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        };
        let session = EditSession::new(document, dictionary);
        let mut log = SessionLog::new(min_level);
        log.record(
            LogEntry::new(LogLevel::Debug, "session opened")
                .with_source(session.id())
                .with_field("chars", session.get_text().chars().count()),
        );

        Self {
            session,
            log,
            steps: 0,
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Number of commands executed so far
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Executes one command
    ///
    /// Out-of-range offsets are reported in the returned step and logged as
    /// warnings; the session is left untouched and nothing is retried.
    pub fn step(&mut self, line: usize, command: Command) -> StepReport {
        let outcome = self.session.execute(command);
        self.steps += 1;
        self.log_outcome(line, command, &outcome);
        StepReport {
            line,
            command,
            outcome,
        }
    }

    /// Runs every step of a script in order
    pub fn run_script(&mut self, mut script: EditScript) -> Vec<StepReport> {
        let mut reports = Vec::with_capacity(script.len());
        while let Some(step) = script.next_step() {
            reports.push(self.step(step.line, step.command));
        }
        reports
    }

    fn log_outcome(
        &mut self,
        line: usize,
        command: Command,
        outcome: &Result<CommandOutcome, EditError>,
    ) {
        let mut entry = match outcome {
            Ok(result) => {
                let entry = LogEntry::new(LogLevel::Info, "command executed");
                match result {
                    CommandOutcome::Text(text) => entry.with_field("chars", text.chars().count()),
                    CommandOutcome::Count(count) => entry.with_field("count", count),
                    CommandOutcome::Unchanged => entry.with_field("unchanged", true),
                }
            }
            Err(EditError::OutOfRange { len, .. }) => {
                LogEntry::new(LogLevel::Warn, "offset out of range").with_field("len", len)
            }
        };
        entry = entry
            .with_source(self.session.id())
            .with_field("op", command.name())
            .with_field("line", line);
        if let Some(offset) = command.offset() {
            entry = entry.with_field("offset", offset);
        }
        if command.is_destructive() {
            entry = entry.with_field("undo_depth", self.session.history().undo_depth());
        }
        self.log.record(entry);

        if self.log.min_level() <= LogLevel::Debug {
            self.log.record(
                LogEntry::new(LogLevel::Debug, "baseline")
                    .with_source(self.session.id())
                    .with_field("text", self.session.baseline_text()),
            );
        }
    }
}
