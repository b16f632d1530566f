//! # Comment Cleaning
//!
//! Normalization applied to raw comment bodies before they enter a
//! dataset.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleans raw comment text
///
/// Comment bodies arrive with embedded newlines and irregular spacing;
/// cleaning flattens each comment to a single normalized line so the
/// downstream tokenizers see uniform input.
pub struct CommentCleaner {
    /// Runs of whitespace, including newlines
    whitespace_regex: Regex,
}

impl Default for CommentCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentCleaner {
    /// Create a new comment cleaner
    pub fn new() -> Self {
        Self {
            whitespace_regex: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Clean one comment body
    ///
    /// Steps:
    /// 1. Unicode normalization (NFC)
    /// 2. Collapse all whitespace runs, newlines included, to one space
    /// 3. Trim
    pub fn clean(&self, text: &str) -> String {
        let normalized: String = text.nfc().collect();
        let collapsed = self.whitespace_regex.replace_all(&normalized, " ");
        collapsed.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newlines_become_spaces() {
        let cleaner = CommentCleaner::new();
        assert_eq!(
            cleaner.clean("first line\nsecond line\r\nthird"),
            "first line second line third"
        );
    }

    #[test]
    fn test_whitespace_collapses() {
        let cleaner = CommentCleaner::new();
        assert_eq!(cleaner.clean("  too    many   spaces  "), "too many spaces");
    }

    #[test]
    fn test_empty_stays_empty() {
        let cleaner = CommentCleaner::new();
        assert_eq!(cleaner.clean(""), "");
        assert_eq!(cleaner.clean(" \n \t "), "");
    }
}
