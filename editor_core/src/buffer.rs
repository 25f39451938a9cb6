//! Buffer store
//!
//! Holds the immutable text the pieces point into. Offsets are counted in
//! characters (Unicode scalar values), never bytes.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::piece::Piece;

/// Which buffer a piece points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum BufferId {
    /// Text supplied when the session was created
    Original,
    /// Text of the most recent paste
    Inserted,
    /// Materialized document after the latest cut (the rebase baseline)
    Rebased,
}

impl BufferId {
    pub fn as_str(&self) -> &'static str {
        match self {
            BufferId::Original => "original",
            BufferId::Inserted => "inserted",
            BufferId::Rebased => "rebased",
        }
    }
}

/// The three logical buffers of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferStore {
    original: String,
    inserted: String,
    rebased: String,
}

impl BufferStore {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            inserted: String::new(),
            rebased: String::new(),
        }
    }

    pub fn contents(&self, id: BufferId) -> &str {
        match id {
            BufferId::Original => &self.original,
            BufferId::Inserted => &self.inserted,
            BufferId::Rebased => &self.rebased,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Length of a buffer in characters
    pub fn char_len(&self, id: BufferId) -> usize {
        self.contents(id).chars().count()
    }

    /// Whether a cut has established a rebase baseline.
    ///
    /// An empty rebased buffer counts as absent, so a cut or undo that
    /// empties the document falls back to addressing the original.
    pub fn has_rebase(&self) -> bool {
        !self.rebased.is_empty()
    }

    /// Buffer that cut and paste offsets are interpreted against
    pub fn baseline(&self) -> BufferId {
        if self.has_rebase() {
            BufferId::Rebased
        } else {
            BufferId::Original
        }
    }

    pub(crate) fn set_inserted(&mut self, text: String) {
        self.inserted = text;
    }

    pub(crate) fn set_rebased(&mut self, text: String) {
        self.rebased = text;
    }

    /// Text a piece refers to, clamped to the end of its buffer
    pub fn resolve(&self, piece: &Piece) -> &str {
        char_slice(self.contents(piece.buffer), piece.start, piece.end())
    }
}

/// Slices `text` by character positions `[start, end)`.
///
/// Positions past the end clamp to the end and an inverted range yields an
/// empty string, so overlong lengths shorten the result instead of failing.
pub(crate) fn char_slice(text: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }
    let byte_at = |pos: usize| {
        text.char_indices()
            .nth(pos)
            .map(|(idx, _)| idx)
            .unwrap_or(text.len())
    };
    let from = byte_at(start);
    let to = byte_at(end);
    &text[from..to]
}
