//! Benchmark harness
//!
//! Each case runs against a fresh session, alternating operations the way
//! an interactive user would (cut then paste, delete then undo, ...).

use editor_core::{Dictionary, EditResult, EditSession};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Offset and length used by the range operations
const RANGE: (usize, usize) = (10, 100);
/// Offset used by paste
const PASTE_AT: usize = 65;

/// Benchmark case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchCase {
    Delete,
    DeleteUndo,
    Highlight,
    CutUndo,
    CutRedo,
    CutPaste,
    CopyPaste,
    GetText,
    Misspellings,
}

impl BenchCase {
    pub const ALL: [BenchCase; 9] = [
        BenchCase::Delete,
        BenchCase::DeleteUndo,
        BenchCase::Highlight,
        BenchCase::CutUndo,
        BenchCase::CutRedo,
        BenchCase::CutPaste,
        BenchCase::CopyPaste,
        BenchCase::GetText,
        BenchCase::Misspellings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BenchCase::Delete => "delete text",
            BenchCase::DeleteUndo => "delete and undo text",
            BenchCase::Highlight => "highlight",
            BenchCase::CutUndo => "cut undo",
            BenchCase::CutRedo => "cut redo",
            BenchCase::CutPaste => "cut paste",
            BenchCase::CopyPaste => "copy paste",
            BenchCase::GetText => "text retrieval",
            BenchCase::Misspellings => "misspelling",
        }
    }
}

/// Timing for one case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchReport {
    pub case: BenchCase,
    pub iterations: usize,
    pub elapsed: Duration,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} operations took {:.6} s",
            self.iterations,
            self.case.as_str(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Runs one case `iterations` times against a fresh session.
///
/// Alternating cases start counting at 2 so that even steps perform the
/// edit and odd steps the follow-up; they run `iterations - 2` steps.
pub fn run_case(
    case: BenchCase,
    document: &str,
    dictionary: Arc<dyn Dictionary>,
    iterations: usize,
) -> EditResult<BenchReport> {
    let mut session = EditSession::new(document, dictionary);
    let (offset, length) = RANGE;
    let start = Instant::now();

    match case {
        BenchCase::Delete => {
            for _ in 0..iterations {
                session.delete(offset, length)?;
            }
        }
        BenchCase::DeleteUndo => {
            for n in 2..iterations {
                if n % 2 == 0 {
                    session.delete(offset, length)?;
                } else {
                    session.undo();
                }
            }
        }
        BenchCase::Highlight => {
            for _ in 0..iterations {
                session.highlight(offset, length);
            }
        }
        BenchCase::CutUndo => {
            for n in 2..iterations {
                if n % 2 == 0 {
                    session.cut(offset, length)?;
                } else {
                    session.undo();
                }
            }
        }
        BenchCase::CutRedo => {
            for n in 2..iterations {
                if n % 2 == 0 {
                    session.cut(offset, length)?;
                } else {
                    session.paste(PASTE_AT)?;
                    session.undo();
                    session.redo();
                }
            }
        }
        BenchCase::CutPaste => {
            for n in 2..iterations {
                if n % 2 == 0 {
                    session.cut(offset, length)?;
                } else {
                    session.paste(PASTE_AT)?;
                }
            }
        }
        BenchCase::CopyPaste => {
            for n in 2..iterations {
                if n % 2 == 0 {
                    session.copy(offset, length)?;
                } else {
                    session.paste(PASTE_AT)?;
                }
            }
        }
        BenchCase::GetText => {
            for _ in 0..iterations {
                session.get_text();
            }
        }
        BenchCase::Misspellings => {
            for _ in 0..iterations {
                session.misspellings();
            }
        }
    }

    Ok(BenchReport {
        case,
        iterations,
        elapsed: start.elapsed(),
    })
}

/// Runs every case in order, stopping at the first failing one
pub fn run_all(
    document: &str,
    dictionary: Arc<dyn Dictionary>,
    iterations: usize,
) -> EditResult<Vec<BenchReport>> {
    BenchCase::ALL
        .iter()
        .map(|case| run_case(*case, document, Arc::clone(&dictionary), iterations))
        .collect()
}
