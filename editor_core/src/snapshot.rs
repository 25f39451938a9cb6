//! Session snapshot for deterministic parity testing

use crate::Piece;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Complete session state snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct EditorSnapshot {
    /// Rendered piece sequence
    pub text: String,
    /// Text cut/paste offsets address
    pub baseline: String,
    pub clipboard: String,
    pub pieces: Vec<Piece>,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl EditorSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update(self.text.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.baseline.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.clipboard.as_bytes());
        hasher.update([0u8]);

        for piece in &self.pieces {
            hasher.update(piece.buffer.as_str().as_bytes());
            hasher.update(piece.start.to_le_bytes());
            hasher.update(piece.length.to_le_bytes());
        }

        hasher.update(self.undo_depth.to_le_bytes());
        hasher.update(self.redo_depth.to_le_bytes());

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
