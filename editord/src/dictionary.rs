//! Word list provider
//!
//! The host reads the word list from storage once and hands the same
//! `Arc` to every session; sessions never read files themselves.

use editor_core::WordList;
use std::path::Path;

use crate::error::{read_text, HostResult};

/// Word list file name used when none is configured
pub const DEFAULT_WORD_LIST: &str = "spell.words.txt";

/// Loads a word list file (one or more space-separated words per line)
pub fn load_word_list(path: &Path) -> HostResult<WordList> {
    let text = read_text(path)?;
    Ok(WordList::from_text(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HostError;
    use editor_core::Dictionary;
    use std::io::Write;

    #[test]
    fn test_load_word_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "is a").unwrap();
        writeln!(file, "the").unwrap();

        let words = load_word_list(file.path()).unwrap();
        assert!(words.contains("is"));
        assert!(words.contains("a"));
        assert!(words.contains("the"));
        assert!(!words.contains("Neeva"));
    }

    #[test]
    fn test_missing_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        match load_word_list(&missing) {
            Err(HostError::Read { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected Read error, got {:?}", other),
        }
    }
}
