// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental token parser over the text field's buffer.
//!
//! ## Overview
//!
//! The parser watches successive values of the field's text and spots the
//! commit edge: an edit that did not shrink the text and ended with the
//! separator character. The text before that separator — trimmed of
//! surrounding whitespace — is the candidate token.
//!
//! The separator keystroke is always consumed: whether the candidate is
//! accepted, rejected as a duplicate, or empty after trimming, the buffer
//! resets to empty. This matches the original widget's behavior; whether the
//! separator should instead survive a rejection is a product question, not
//! one this crate answers.

use alloc::string::String;

/// Watches text changes and extracts committed candidates.
///
/// Holds the current buffer and the text as of the previous change event.
/// Deletions never commit: a shrinking edit that happens to end with a
/// separator is the user deleting, not finishing a token.
#[derive(Clone, Debug)]
pub struct TokenParser {
    separator: char,
    text: String,
    last: String,
}

impl Default for TokenParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenParser {
    /// Create a parser with the default separator (a single space).
    pub fn new() -> Self {
        Self::with_separator(' ')
    }

    /// Create a parser committing on `separator`.
    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            text: String::new(),
            last: String::new(),
        }
    }

    /// The commit character.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The current buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if the buffer is empty — the precondition for backspace acting
    /// on chips instead of text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Record a text change and return the candidate it committed, if any.
    ///
    /// On a commit edge the buffer resets to empty even when no candidate is
    /// returned (empty after trimming). The previous-text marker is updated
    /// on every call, whichever branch is taken.
    pub fn text_changed(&mut self, new_text: &str) -> Option<String> {
        let shrunk = new_text.chars().count() < self.last.chars().count();
        self.text.clear();
        self.text.push_str(new_text);

        let mut candidate = None;
        if !shrunk && new_text.ends_with(self.separator) {
            if let Some(at) = new_text.rfind(self.separator) {
                let trimmed = new_text[..at].trim();
                if !trimmed.is_empty() {
                    candidate = Some(String::from(trimmed));
                }
            }
            // Separator consumed either way.
            self.text.clear();
        }

        self.last.clear();
        self.last.push_str(new_text);
        candidate
    }

    /// Reset both buffers, e.g. when the host clears the field.
    pub fn clear(&mut self) {
        self.text.clear();
        self.last.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_commits_the_preceding_text() {
        let mut p = TokenParser::new();
        assert_eq!(p.text_changed("ru"), None);
        assert_eq!(p.text_changed("rust"), None);
        assert_eq!(p.text_changed("rust ").as_deref(), Some("rust"));
        assert!(p.is_empty(), "buffer resets after a commit");
    }

    #[test]
    fn candidate_is_trimmed() {
        let mut p = TokenParser::new();
        // Leading spaces survive the buffer but not the committed tag.
        // (rfind picks the final separator, so only the trailing one splits.)
        assert_eq!(p.text_changed("  rust ").as_deref(), Some("rust"));
    }

    #[test]
    fn whitespace_only_candidate_is_swallowed() {
        let mut p = TokenParser::new();
        assert_eq!(p.text_changed("    "), None);
        assert!(p.is_empty(), "the separator keystroke is still consumed");
    }

    #[test]
    fn deletions_never_commit() {
        let mut p = TokenParser::new();
        let _ = p.text_changed("a b");
        // Deleting back to a separator-terminated prefix is not a commit.
        assert_eq!(p.text_changed("a "), None);
        assert_eq!(p.text(), "a ");
    }

    #[test]
    fn same_length_edit_ending_in_separator_commits() {
        let mut p = TokenParser::new();
        let _ = p.text_changed("ab");
        // Replacing the last character with the separator is not a deletion.
        assert_eq!(p.text_changed("a ").as_deref(), Some("a"));
    }

    #[test]
    fn custom_separator() {
        let mut p = TokenParser::with_separator(',');
        assert_eq!(p.text_changed("one,").as_deref(), Some("one"));
        assert_eq!(p.text_changed("two three,").as_deref(), Some("two three"));
    }

    #[test]
    fn only_the_last_separator_splits() {
        let mut p = TokenParser::with_separator(',');
        // An embedded separator can appear mid-edit (e.g. paste-like host
        // updates); everything before the final one is the candidate.
        assert_eq!(p.text_changed("a,b,").as_deref(), Some("a,b"));
    }

    #[test]
    fn clear_resets_both_buffers() {
        let mut p = TokenParser::new();
        let _ = p.text_changed("abc");
        p.clear();
        // After a clear, a one-character text is not a deletion.
        assert_eq!(p.text_changed(" "), None);
        assert!(p.is_empty());
    }
}
