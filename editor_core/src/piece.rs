//! Piece sequence

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::buffer::{BufferId, BufferStore};

/// Maximum number of pieces in a sequence.
///
/// Edits split the document into at most left/middle/right. Delete and cut
/// rewrite slots 0 and 1 only; a third slot left by an earlier paste stays
/// in place and keeps contributing to the rendered text.
pub const MAX_PIECES: usize = 3;

/// A slice `[start, start + length)` of one buffer, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Piece {
    pub buffer: BufferId,
    pub start: usize,
    pub length: usize,
}

impl Piece {
    pub const fn new(buffer: BufferId, start: usize, length: usize) -> Self {
        Self {
            buffer,
            start,
            length,
        }
    }

    /// Exclusive end position
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }
}

/// Ordered pieces whose concatenation is the live document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceTable {
    pieces: Vec<Piece>,
}

impl PieceTable {
    /// Sequence covering all of `len` characters of the original buffer
    pub fn new(len: usize) -> Self {
        Self {
            pieces: vec![Piece::new(BufferId::Original, 0, len)],
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Overwrite slot `index`, or append when `index` is one past the end
    pub(crate) fn set_slot(&mut self, index: usize, piece: Piece) {
        debug_assert!(index < MAX_PIECES, "piece slot {} over cap", index);
        debug_assert!(index <= self.pieces.len(), "piece slot {} leaves a gap", index);
        if let Some(slot) = self.pieces.get_mut(index) {
            *slot = piece;
        } else {
            self.pieces.push(piece);
        }
    }

    /// Concatenate every piece in order
    pub fn render(&self, buffers: &BufferStore) -> String {
        let mut text = String::new();
        for piece in &self.pieces {
            text.push_str(buffers.resolve(piece));
        }
        text
    }
}
