//! EditSession: the edit engine
//!
//! Destructive operations (delete, cut, paste) rewrite the piece table,
//! materialize the result and record it in history. Copy and highlight only
//! read. Undo and redo take text from the history stacks at face value and
//! never touch the piece table.

use std::sync::Arc;

use core_types::SessionId;

use crate::{
    buffer::{char_slice, BufferId, BufferStore},
    clipboard::Clipboard,
    command::{Command, CommandOutcome},
    error::{check_offset, EditResult},
    history::History,
    lint::{count_misspellings, Dictionary},
    piece::{Piece, PieceTable},
    snapshot::EditorSnapshot,
};

/// One editing session over a document
pub struct EditSession {
    id: SessionId,
    buffers: BufferStore,
    pieces: PieceTable,
    clipboard: Clipboard,
    history: History,
    dictionary: Arc<dyn Dictionary>,
}

impl EditSession {
    /// Create a session over `document`, sharing an already loaded dictionary
    pub fn new(document: impl Into<String>, dictionary: Arc<dyn Dictionary>) -> Self {
        let document = document.into();
        let pieces = PieceTable::new(document.chars().count());
        Self {
            id: SessionId::new(),
            history: History::new(document.clone()),
            buffers: BufferStore::new(document),
            pieces,
            clipboard: Clipboard::new(),
            dictionary,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Delete `length` characters at `offset` of the original text
    pub fn delete(&mut self, offset: usize, length: usize) -> EditResult<String> {
        let len = self.buffers.char_len(BufferId::Original);
        check_offset(offset, len)?;

        self.split_around(BufferId::Original, offset, length, len);

        let text = self.get_text();
        self.history.record(text.clone());
        Ok(text)
    }

    /// Cut `length` characters at `offset` of the rebase baseline.
    ///
    /// The remaining text becomes the new baseline and is returned; the cut
    /// characters replace the clipboard.
    pub fn cut(&mut self, offset: usize, length: usize) -> EditResult<String> {
        let source = self.buffers.baseline();
        let len = self.buffers.char_len(source);
        check_offset(offset, len)?;

        self.split_around(source, offset, length, len);

        let end = offset.saturating_add(length);
        let (cut, remaining) = {
            let baseline = self.buffers.contents(source);
            let cut = char_slice(baseline, offset, end).to_string();
            let mut remaining = char_slice(baseline, 0, offset).to_string();
            remaining.push_str(char_slice(baseline, end, len));
            (cut, remaining)
        };

        self.clipboard.set(cut);
        self.buffers.set_rebased(remaining.clone());
        self.history.record(remaining.clone());
        Ok(remaining)
    }

    /// Copy `length` characters at `offset` of the original text
    pub fn copy(&mut self, offset: usize, length: usize) -> EditResult<String> {
        let original = self.buffers.original();
        check_offset(offset, self.buffers.char_len(BufferId::Original))?;

        let copied = char_slice(original, offset, offset.saturating_add(length)).to_string();
        self.clipboard.set(copied.clone());
        Ok(copied)
    }

    /// Insert the clipboard at `offset` of the rebase baseline.
    ///
    /// The inserted buffer takes the clipboard before the offset is checked,
    /// so a rejected paste still changes what a live inserted piece renders.
    pub fn paste(&mut self, offset: usize) -> EditResult<String> {
        let pasted = self.clipboard.contents().to_string();
        let pasted_len = pasted.chars().count();
        self.buffers.set_inserted(pasted);

        let source = self.buffers.baseline();
        let len = self.buffers.char_len(source);
        check_offset(offset, len)?;

        self.pieces.set_slot(0, Piece::new(source, 0, offset));
        self.pieces.set_slot(1, Piece::new(BufferId::Inserted, 0, pasted_len));
        self.pieces.set_slot(2, Piece::new(source, offset, len - offset));

        let text = self.get_text();
        self.history.record(text.clone());
        if self.buffers.has_rebase() {
            self.buffers.set_rebased(text.clone());
        }
        Ok(text)
    }

    /// Characters `[offset, offset + length)` of the original text, clamped
    pub fn highlight(&self, offset: usize, length: usize) -> String {
        char_slice(self.buffers.original(), offset, offset.saturating_add(length)).to_string()
    }

    /// Render the piece table
    pub fn get_text(&self) -> String {
        self.pieces.render(&self.buffers)
    }

    /// Step back one snapshot; the reported text also becomes the baseline
    /// when one is active
    pub fn undo(&mut self) -> Option<String> {
        let text = self.history.undo()?;
        self.rebase_onto(&text);
        Some(text)
    }

    /// Step forward one snapshot; the reported text also becomes the
    /// baseline when one is active
    pub fn redo(&mut self) -> Option<String> {
        let text = self.history.redo()?;
        self.rebase_onto(&text);
        Some(text)
    }

    /// Words of the original text missing from the dictionary
    pub fn misspellings(&self) -> usize {
        count_misspellings(self.buffers.original(), self.dictionary.as_ref())
    }

    /// Run a parsed command
    pub fn execute(&mut self, command: Command) -> EditResult<CommandOutcome> {
        let outcome = match command {
            Command::Delete { offset, length } => CommandOutcome::Text(self.delete(offset, length)?),
            Command::Cut { offset, length } => CommandOutcome::Text(self.cut(offset, length)?),
            Command::Copy { offset, length } => CommandOutcome::Text(self.copy(offset, length)?),
            Command::Paste { offset } => CommandOutcome::Text(self.paste(offset)?),
            Command::Highlight { offset, length } => {
                CommandOutcome::Text(self.highlight(offset, length))
            }
            Command::GetText => CommandOutcome::Text(self.get_text()),
            Command::Undo => self
                .undo()
                .map_or(CommandOutcome::Unchanged, CommandOutcome::Text),
            Command::Redo => self
                .redo()
                .map_or(CommandOutcome::Unchanged, CommandOutcome::Text),
            Command::Misspellings => CommandOutcome::Count(self.misspellings()),
        };
        Ok(outcome)
    }

    pub fn clipboard(&self) -> &str {
        self.clipboard.contents()
    }

    /// Text cut and paste currently address
    pub fn baseline_text(&self) -> &str {
        self.buffers.contents(self.buffers.baseline())
    }

    pub fn pieces(&self) -> &[Piece] {
        self.pieces.pieces()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Get a complete snapshot of session state (for parity testing)
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            text: self.get_text(),
            baseline: self.baseline_text().to_string(),
            clipboard: self.clipboard.contents().to_string(),
            pieces: self.pieces.pieces().to_vec(),
            undo_depth: self.history.undo_depth(),
            redo_depth: self.history.redo_depth(),
        }
    }

    // Left piece [0, offset) and a right piece starting at offset + length.
    // The right length is `len - length + 1`, one past what is needed; the
    // render clamps it to the buffer end.
    fn split_around(&mut self, source: BufferId, offset: usize, length: usize, len: usize) {
        self.pieces.set_slot(0, Piece::new(source, 0, offset));
        self.pieces.set_slot(
            1,
            Piece::new(
                source,
                offset.saturating_add(length),
                (len + 1).saturating_sub(length),
            ),
        );
    }

    fn rebase_onto(&mut self, text: &str) {
        if self.buffers.has_rebase() {
            self.buffers.set_rebased(text.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditError, WordList};

    const DOCUMENT: &str = "Neeva is Awesome";

    fn session() -> EditSession {
        let words: WordList = ["is", "a", "the"].into_iter().collect();
        EditSession::new(DOCUMENT, Arc::new(words))
    }

    #[test]
    fn test_new_session() {
        let session = session();
        assert_eq!(session.get_text(), DOCUMENT);
        assert_eq!(session.baseline_text(), DOCUMENT);
        assert_eq!(session.clipboard(), "");
        assert_eq!(session.pieces().len(), 1);
        assert_eq!(session.history().undo_depth(), 1);
    }

    #[test]
    fn test_copy_paste() {
        let mut session = session();
        assert_eq!(session.copy(0, 5).unwrap(), "Neeva");
        session.paste(5).unwrap();
        assert_eq!(session.get_text(), "NeevaNeeva is Awesome");
        assert_eq!(session.pieces().len(), 3);
    }

    #[test]
    fn test_cut_paste_rebases() {
        let mut session = session();
        assert_eq!(session.cut(0, 5).unwrap(), " is Awesome");
        assert_eq!(session.clipboard(), "Neeva");

        session.paste(3).unwrap();
        assert_eq!(session.baseline_text(), " isNeeva Awesome");
    }

    #[test]
    fn test_delete() {
        let mut session = session();
        assert_eq!(session.delete(0, 5).unwrap(), " is Awesome");
        assert_eq!(session.history().undo_depth(), 2);
    }

    #[test]
    fn test_delete_middle() {
        let mut session = session();
        assert_eq!(session.delete(5, 3).unwrap(), "Neeva Awesome");
    }

    #[test]
    fn test_delete_always_addresses_original() {
        let mut session = session();
        session.delete(0, 6).unwrap();
        assert_eq!(session.delete(0, 5).unwrap(), " is Awesome");
    }

    #[test]
    fn test_delete_overlong_length_truncates() {
        let mut session = session();
        assert_eq!(session.delete(5, 100).unwrap(), "Neeva");
    }

    #[test]
    fn test_undo_after_cut_paste() {
        let mut session = session();
        let after_cut = session.cut(0, 5).unwrap();
        session.paste(8).unwrap();
        assert_eq!(session.undo(), Some(after_cut.clone()));
        assert_eq!(session.baseline_text(), after_cut);
    }

    #[test]
    fn test_redo_after_undo() {
        let mut session = session();
        let after_cut = session.cut(0, 5).unwrap();
        let after_paste = session.paste(8).unwrap();
        assert_eq!(after_paste, " is AwesNeevaome");
        assert_eq!(session.undo(), Some(after_cut));
        assert_eq!(session.redo(), Some(after_paste.clone()));
        assert_eq!(session.baseline_text(), after_paste);
    }

    #[test]
    fn test_undo_without_rebase_leaves_pieces() {
        let mut session = session();
        session.delete(0, 6).unwrap();
        assert_eq!(session.undo(), Some(DOCUMENT.to_string()));
        // Undo reports history; the piece table still renders the delete
        assert_eq!(session.get_text(), "is Awesome");
        assert_eq!(session.baseline_text(), DOCUMENT);
    }

    #[test]
    fn test_undo_on_fresh_session() {
        let mut session = session();
        assert_eq!(session.undo(), None);
        assert_eq!(session.undo(), None);
    }

    #[test]
    fn test_highlight_ignores_edits() {
        let mut session = session();
        session.cut(0, 6).unwrap();
        session.delete(3, 4).unwrap();
        assert_eq!(session.highlight(0, 5), "Neeva");
        assert_eq!(session.highlight(9, 100), "Awesome");
        assert_eq!(session.highlight(100, 5), "");
    }

    #[test]
    fn test_out_of_range_offsets() {
        let mut session = session();
        let err = EditError::OutOfRange { offset: 16, len: 16 };
        assert_eq!(session.delete(16, 1), Err(err.clone()));
        assert_eq!(session.cut(16, 1), Err(err.clone()));
        assert_eq!(session.copy(16, 1), Err(err.clone()));
        assert_eq!(session.paste(16), Err(err));
        assert_eq!(session.get_text(), DOCUMENT);
        assert_eq!(session.history().undo_depth(), 1);
    }

    #[test]
    fn test_cut_offsets_checked_against_baseline() {
        let mut session = session();
        session.cut(0, 5).unwrap();
        // Baseline is now 11 characters long
        assert_eq!(
            session.cut(11, 1),
            Err(EditError::OutOfRange { offset: 11, len: 11 })
        );
        // Copy still addresses the original
        assert_eq!(session.copy(11, 5).unwrap(), "esome");
    }

    #[test]
    fn test_failed_paste_replaces_inserted_buffer() {
        let mut session = session();
        session.copy(0, 5).unwrap();
        session.paste(5).unwrap();
        session.copy(9, 7).unwrap();
        assert_eq!(
            session.paste(99),
            Err(EditError::OutOfRange { offset: 99, len: 16 })
        );
        // The live inserted piece keeps its length but reads the new clipboard
        assert_eq!(session.get_text(), "NeevaAweso is Awesome");
        assert_eq!(session.history().undo_depth(), 2);
    }

    #[test]
    fn test_cut_after_paste_rebases_from_pasted_text() {
        let mut session = session();
        session.cut(0, 5).unwrap();
        assert_eq!(session.paste(3).unwrap(), " isNeeva Awesome");
        assert_eq!(session.cut(3, 5).unwrap(), " is Awesome");
        assert_eq!(session.clipboard(), "Neeva");
        assert_eq!(session.baseline_text(), " is Awesome");
    }

    #[test]
    fn test_cut_overlong_length_truncates() {
        let mut session = session();
        assert_eq!(session.cut(5, 100).unwrap(), "Neeva");
        assert_eq!(session.clipboard(), " is Awesome");
        assert_eq!(session.baseline_text(), "Neeva");
    }

    #[test]
    fn test_misspellings_ignores_edits() {
        let mut session = session();
        assert_eq!(session.misspellings(), 2);
        session.cut(0, 6).unwrap();
        session.paste(2).unwrap();
        assert_eq!(session.misspellings(), 2);
    }

    #[test]
    fn test_execute_dispatch() {
        let mut session = session();
        assert_eq!(
            session.execute(Command::Copy { offset: 0, length: 5 }),
            Ok(CommandOutcome::Text("Neeva".into()))
        );
        assert_eq!(
            session.execute(Command::Misspellings),
            Ok(CommandOutcome::Count(2))
        );
        assert_eq!(
            session.execute(Command::GetText),
            Ok(CommandOutcome::Text(DOCUMENT.into()))
        );
    }

    #[test]
    fn test_execute_undo_with_nothing_left() {
        let mut session = session();
        assert_eq!(session.execute(Command::Undo), Ok(CommandOutcome::Unchanged));
    }

    #[test]
    fn test_snapshot() {
        let mut session = session();
        session.cut(0, 6).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.baseline, "is Awesome");
        assert_eq!(snapshot.clipboard, "Neeva ");
        assert_eq!(snapshot.pieces.len(), 2);
        assert_eq!(snapshot.undo_depth, 2);
        assert_eq!(snapshot.redo_depth, 1);
    }

    #[test]
    fn test_sessions_share_dictionary() {
        let words: Arc<dyn Dictionary> = Arc::new(WordList::from_text("is"));
        let first = EditSession::new("a is b", Arc::clone(&words));
        let second = EditSession::new("is is", Arc::clone(&words));
        assert_ne!(first.id(), second.id());
        assert_eq!(first.misspellings(), 2);
        assert_eq!(second.misspellings(), 0);
    }
}
