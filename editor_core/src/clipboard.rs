//! Single-slot clipboard

/// Holds the most recently copied or cut text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    contents: String,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Replace the held text; paste only ever reads it
    pub fn set(&mut self, text: impl Into<String>) {
        self.contents = text.into();
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let clipboard = Clipboard::new();
        assert!(clipboard.is_empty());
        assert_eq!(clipboard.contents(), "");
    }

    #[test]
    fn test_set_overwrites() {
        let mut clipboard = Clipboard::new();
        clipboard.set("first");
        clipboard.set("second");
        assert_eq!(clipboard.contents(), "second");
    }
}
