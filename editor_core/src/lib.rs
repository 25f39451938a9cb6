//! # Editor Core
//!
//! In-memory document editing engine built on a small piece table.
//!
//! ## Philosophy
//!
//! - **Edits are rearrangements**: Destructive operations rewrite a short list
//!   of pieces over immutable buffers instead of rewriting the document
//! - **Deterministic**: Same command trace => same session state
//! - **Snapshot history**: Undo/redo stacks hold full document text
//! - **No ambient authority**: The dictionary is injected, never loaded here
//! - **No I/O**: Hosts decide where documents, word lists and logs live
//!
//! ## Design
//!
//! The core provides:
//! - BufferStore: The original, inserted and rebased buffers
//! - PieceTable: Up to three pieces whose concatenation is the live text
//! - Clipboard: Single-slot holder for copied or cut text
//! - History: Undo/redo stacks of materialized snapshots
//! - EditSession: The edit engine tying the above together
//! - Dictionary / WordList: Spelling lookups for the misspelling count
//!
//! ## Addressing
//!
//! `delete`, `copy` and `highlight` always address the text the session
//! was created with. `cut` and `paste` address the rebase baseline, which
//! becomes the post-cut text after the first cut and follows later pastes,
//! undos and redos.

pub mod buffer;
pub mod clipboard;
pub mod command;
pub mod error;
pub mod history;
pub mod lint;
pub mod piece;
pub mod session;
pub mod snapshot;

pub use buffer::{BufferId, BufferStore};
pub use clipboard::Clipboard;
pub use command::{parse_command, Command, CommandError, CommandOutcome};
pub use error::{EditError, EditResult};
pub use history::History;
pub use lint::{count_misspellings, Dictionary, WordList};
pub use piece::{Piece, PieceTable, MAX_PIECES};
pub use session::EditSession;
pub use snapshot::EditorSnapshot;
