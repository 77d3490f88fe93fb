// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tags-input controller: selection state machine and commit pipeline.
//!
//! ## Overview
//!
//! [`TagsInput`] receives the host's input events (text changes, taps, and
//! the backspace signal), runs the token parser and the selection state
//! machine, and mutates the embedder's [`TagStore`] through the operations
//! below. Each operation returns at most one [`TagEvent`] for the host to
//! react to.
//!
//! ## State machine
//!
//! Two states, `Unselected` and `Selected(index)`:
//!
//! - tapping a chip selects it; tapping the field or typing deselects;
//! - backspace with a selection deletes the selected chip;
//! - backspace with no selection and an empty buffer selects the last chip
//!   (a second backspace then deletes it);
//! - backspace with text in the buffer is ordinary editing and none of this
//!   crate's business.
//!
//! Every removal clears the selection, and every index is re-checked against
//! the store at the moment of use — the host may have mutated the collection
//! since the event that produced the index. Out-of-range indices are
//! no-ops, never panics.

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::parser::TokenParser;
use crate::types::{AddPolicy, Selection, TagEvent, TagStore, UniqueTags};

/// Headless controller for a tags-input control.
///
/// Generic over the [`AddPolicy`] deciding which committed candidates become
/// tags; the default rejects duplicates.
///
/// ## Usage
///
/// - Forward every text change to [`TagsInput::text_changed`].
/// - Once per tick (not mid-render), flush with [`TagsInput::commit`].
/// - Forward taps to [`TagsInput::tap_chip`] / [`TagsInput::tap_field`] and
///   the backspace signal to [`TagsInput::backspace`].
/// - Apply the returned [`TagEvent`]s: re-render chips, update the field.
#[derive(Clone, Debug)]
pub struct TagsInput<P: AddPolicy = UniqueTags> {
    parser: TokenParser,
    policy: P,
    selection: Selection,
    /// Candidates staged by commit edges, applied oldest-first on later
    /// ticks. A queue, not a slot: several edits can land between ticks and
    /// every committed token must survive until it is flushed.
    pending: VecDeque<String>,
}

impl TagsInput<UniqueTags> {
    /// Create a controller with the default space separator and
    /// duplicate-rejecting policy.
    pub fn new() -> Self {
        Self::with_policy(UniqueTags)
    }
}

impl Default for TagsInput<UniqueTags> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: AddPolicy> TagsInput<P> {
    /// Create a controller with a custom add policy.
    pub fn with_policy(policy: P) -> Self {
        Self {
            parser: TokenParser::new(),
            policy,
            selection: Selection::Unselected,
            pending: VecDeque::new(),
        }
    }

    /// Create a controller committing on `separator` instead of space.
    pub fn with_separator(separator: char, policy: P) -> Self {
        Self {
            parser: TokenParser::with_separator(separator),
            ..Self::with_policy(policy)
        }
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The field text as the core last saw it. After a commit edge this is
    /// empty; the host should write it back into the field.
    pub fn text(&self) -> &str {
        self.parser.text()
    }

    /// True if at least one candidate is staged for [`TagsInput::commit`].
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Record a change to the field's text. Typing always deselects.
    ///
    /// A separator-terminated edit stages its candidate; nothing touches the
    /// store until the host flushes with [`TagsInput::commit`] on its next
    /// tick.
    pub fn text_changed(&mut self, new_text: &str) -> Option<TagEvent> {
        let was_selected = self.selection != Selection::Unselected;
        self.selection = Selection::Unselected;
        if let Some(candidate) = self.parser.text_changed(new_text) {
            self.pending.push_back(candidate);
        }
        was_selected.then_some(TagEvent::SelectionChanged {
            selection: Selection::Unselected,
        })
    }

    /// Flush the oldest staged candidate into `tags`.
    ///
    /// The add policy runs here, at commit time, against the store being
    /// mutated. A rejection drops that candidate silently and the next one
    /// is tried — the typed buffer was consumed at the separator keystroke
    /// either way. Each call appends at most one tag; hosts call this once
    /// per tick, or until it returns `None` to drain a burst of edits.
    pub fn commit<S: TagStore>(&mut self, tags: &mut S) -> Option<TagEvent> {
        while let Some(candidate) = self.pending.pop_front() {
            if self.policy.should_add(&candidate, tags) {
                tags.push(candidate);
                return Some(TagEvent::Added {
                    index: tags.len() - 1,
                });
            }
        }
        None
    }

    /// Handle the backspace-pressed signal from the host's text field.
    ///
    /// With a selection, deletes the selected chip. With no selection, an
    /// empty buffer, and at least one tag, selects the last chip. Otherwise
    /// the keystroke is ordinary text editing and the core stays out of it.
    pub fn backspace<S: TagStore>(&mut self, tags: &mut S) -> Option<TagEvent> {
        match self.selection {
            Selection::Selected(index) => {
                self.selection = Selection::Unselected;
                // The index may have gone stale since the chip was selected.
                tags.remove(index).map(|_| TagEvent::Removed { index })
            }
            Selection::Unselected if self.parser.is_empty() && !tags.is_empty() => {
                self.selection = Selection::Selected(tags.len() - 1);
                Some(TagEvent::SelectionChanged {
                    selection: self.selection,
                })
            }
            Selection::Unselected => None,
        }
    }

    /// Select the chip at `index`. Out-of-range taps are ignored.
    pub fn tap_chip<S: TagStore>(&mut self, index: usize, tags: &S) -> Option<TagEvent> {
        if index >= tags.len() {
            return None;
        }
        self.selection = Selection::Selected(index);
        Some(TagEvent::SelectionChanged {
            selection: self.selection,
        })
    }

    /// A direct tap on the text field clears the selection.
    pub fn tap_field(&mut self) -> Option<TagEvent> {
        let was_selected = self.selection != Selection::Unselected;
        self.selection = Selection::Unselected;
        was_selected.then_some(TagEvent::SelectionChanged {
            selection: Selection::Unselected,
        })
    }

    /// Remove the tag at `index` outright — the chip remove-button path.
    ///
    /// Clears the selection regardless of which chip was removed, since the
    /// selected index may have shifted.
    pub fn remove<S: TagStore>(&mut self, index: usize, tags: &mut S) -> Option<TagEvent> {
        self.selection = Selection::Unselected;
        tags.remove(index).map(|_| TagEvent::Removed { index })
    }
}
