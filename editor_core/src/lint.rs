//! Misspelling count against an injected dictionary

use std::collections::HashSet;

/// Set-membership lookup for valid words.
///
/// Sessions hold the dictionary behind an `Arc`, so one provider is loaded
/// once and shared read-only by every session.
pub trait Dictionary: Send + Sync {
    fn contains(&self, word: &str) -> bool;
}

/// In-memory word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse word-list text: each line is trimmed, then split on single
    /// spaces. Every token is kept, including empty ones from blank lines.
    pub fn from_text(text: &str) -> Self {
        let mut list = Self::new();
        for line in text.lines() {
            for word in line.trim().split(' ') {
                list.insert(word);
            }
        }
        list
    }

    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Count space-separated tokens of `text` missing from `dictionary`.
///
/// Matching is exact: case-sensitive, punctuation kept, and runs of spaces
/// produce empty tokens that are looked up like any other.
pub fn count_misspellings(text: &str, dictionary: &dyn Dictionary) -> usize {
    text.split(' ')
        .filter(|word| !dictionary.contains(word))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> WordList {
        ["is", "a", "the", "awesome", "editor"].into_iter().collect()
    }

    #[test]
    fn test_count_reference_sentence() {
        assert_eq!(count_misspellings("Neeva is Awesome", &english()), 2);
    }

    #[test]
    fn test_case_sensitive() {
        let dict = english();
        assert_eq!(count_misspellings("awesome", &dict), 0);
        assert_eq!(count_misspellings("Awesome", &dict), 1);
    }

    #[test]
    fn test_punctuation_not_stripped() {
        assert_eq!(count_misspellings("the editor.", &english()), 1);
    }

    #[test]
    fn test_double_space_yields_empty_token() {
        assert_eq!(count_misspellings("is  a", &english()), 1);
        let mut dict = english();
        dict.insert("");
        assert_eq!(count_misspellings("is  a", &dict), 0);
    }

    #[test]
    fn test_empty_text_is_one_empty_token() {
        assert_eq!(count_misspellings("", &english()), 1);
    }

    #[test]
    fn test_from_text_splits_lines_and_spaces() {
        let list = WordList::from_text("apple banana\n  cherry  \n");
        assert!(list.contains("apple"));
        assert!(list.contains("banana"));
        assert!(list.contains("cherry"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_from_text_keeps_blank_line_token() {
        let list = WordList::from_text("apple\n\nbanana");
        assert!(list.contains(""));
    }
}
