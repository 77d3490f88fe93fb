// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the input state machine: selection, events, and the
//! collaborator traits the embedding host implements.

use alloc::string::String;
use alloc::vec::Vec;

/// Which chip, if any, is currently selected.
///
/// At most one chip is selected at a time. The index refers to the current
/// tag collection and must be re-validated against it before use; any state
/// transition that removes a tag clears the selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// No chip is selected; keystrokes edit the text field.
    #[default]
    Unselected,
    /// The chip at this index is selected and highlighted; the next
    /// backspace deletes it.
    Selected(usize),
}

impl Selection {
    /// The selected index, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Unselected => None,
            Self::Selected(index) => Some(index),
        }
    }
}

/// An output event the host applies after handing an input event to the core.
///
/// Events describe what already happened to the collection and the selection;
/// the host's job is to re-render (and re-layout) accordingly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagEvent {
    /// A committed tag was appended at `index`.
    Added {
        /// Position of the new tag (always the end of the collection).
        index: usize,
    },
    /// The tag at `index` was removed. Indices of later tags shift down by
    /// one; the selection has been cleared.
    Removed {
        /// Position the tag occupied before removal.
        index: usize,
    },
    /// The selection changed without any collection mutation.
    SelectionChanged {
        /// The new selection state.
        selection: Selection,
    },
}

/// The embedder's ordered tag collection.
///
/// The collection is supplied, not created, by this crate: the core only
/// appends and removes through this trait. Insertion order is significant
/// and new tags always append. Implementations must treat out-of-range
/// removal as a `None` rather than a panic — indices can go stale between
/// an event and its handling.
pub trait TagStore {
    /// Number of tags.
    fn len(&self) -> usize;

    /// The tag at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<&str>;

    /// Append a tag at the end.
    fn push(&mut self, tag: String);

    /// Remove and return the tag at `index`, or `None` if out of range.
    fn remove(&mut self, index: usize) -> Option<String>;

    /// True if the collection holds no tags.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact-match membership test.
    fn contains(&self, tag: &str) -> bool {
        (0..self.len()).any(|i| self.get(i) == Some(tag))
    }
}

impl TagStore for Vec<String> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.as_slice().get(index).map(String::as_str)
    }

    fn push(&mut self, tag: String) {
        Self::push(self, tag);
    }

    fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.as_slice().len()).then(|| Self::remove(self, index))
    }
}

/// The should-add predicate consulted before a candidate becomes a tag.
///
/// Evaluated at commit time against the collection about to be mutated. A
/// `false` silently drops the candidate — the typed buffer has already been
/// consumed by then (see the crate docs on the swallow behavior).
pub trait AddPolicy {
    /// Whether `candidate` should be appended to `tags`.
    fn should_add(&self, candidate: &str, tags: &dyn TagStore) -> bool;
}

/// Default policy: reject a candidate already present in the collection
/// (case-sensitive exact match).
#[derive(Copy, Clone, Debug, Default)]
pub struct UniqueTags;

impl AddPolicy for UniqueTags {
    fn should_add(&self, candidate: &str, tags: &dyn TagStore) -> bool {
        !tags.contains(candidate)
    }
}

/// Accept every candidate, duplicates included.
#[derive(Copy, Clone, Debug, Default)]
pub struct AcceptAll;

impl AddPolicy for AcceptAll {
    fn should_add(&self, _candidate: &str, _tags: &dyn TagStore) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn vec_store_remove_is_bounds_checked() {
        let mut tags = vec!["a".to_string(), "b".to_string()];
        assert_eq!(TagStore::remove(&mut tags, 5), None);
        assert_eq!(TagStore::remove(&mut tags, 1).as_deref(), Some("b"));
        assert_eq!(tags, ["a"]);
    }

    #[test]
    fn unique_tags_rejects_exact_matches_only() {
        let tags = vec!["rust".to_string(), "UI".to_string()];
        assert!(!UniqueTags.should_add("rust", &tags));
        assert!(UniqueTags.should_add("Rust", &tags), "case-sensitive");
        assert!(UniqueTags.should_add("ui", &tags));
    }

    #[test]
    fn accept_all_allows_duplicates() {
        let tags = vec!["rust".to_string()];
        assert!(AcceptAll.should_add("rust", &tags));
    }

    #[test]
    fn selection_index_accessor() {
        assert_eq!(Selection::Unselected.index(), None);
        assert_eq!(Selection::Selected(3).index(), Some(3));
    }
}
