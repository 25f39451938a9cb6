//! Undo/redo history of full document snapshots

/// Two stacks of materialized document text.
///
/// Both stacks start out holding the initial document. New edits push onto
/// the undo stack without clearing the redo stack, so entries left there by
/// an earlier undo can still be redone after further edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            undo_stack: vec![initial.clone()],
            redo_stack: vec![initial],
        }
    }

    /// Record the text produced by a destructive operation
    pub fn record(&mut self, text: String) {
        self.undo_stack.push(text);
    }

    /// Move the latest snapshot to the redo stack and report the one below.
    ///
    /// Returns `None` when there was nothing to undo, or when the pop left
    /// no snapshot to report.
    pub fn undo(&mut self) -> Option<String> {
        let recent = self.undo_stack.pop()?;
        self.redo_stack.push(recent);
        self.undo_stack.last().cloned()
    }

    /// Move the latest redo snapshot back onto the undo stack and report it
    pub fn redo(&mut self) -> Option<String> {
        let recent = self.redo_stack.pop()?;
        self.undo_stack.push(recent.clone());
        Some(recent)
    }

    /// Snapshot at the top of the undo stack
    pub fn current(&self) -> Option<&str> {
        self.undo_stack.last().map(String::as_str)
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
