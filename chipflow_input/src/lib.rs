// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chipflow Input: the headless interaction core of a tags-input control.
//!
//! ## Overview
//!
//! A tags input is a text field that turns space-delimited typing into
//! removable chips. This crate owns everything about that interaction except
//! pixels: the token parser that spots a completed token, the
//! selection/deletion state machine behind "backspace on an empty field
//! selects, then deletes, the last chip", and the commit pipeline that
//! appends accepted tags to an externally owned collection.
//!
//! It does not render, measure, or capture keys. The rendering host feeds it
//! three kinds of events — text changes, taps, and a single "backspace was
//! pressed" signal (how that is intercepted is the host's business) — and
//! applies the [`TagEvent`]s it returns.
//!
//! ## Collaborators
//!
//! - [`TagStore`](types::TagStore): the embedder's ordered tag collection.
//!   The core never owns the tags; it appends and removes through this trait
//!   and re-checks every index against it, since the host may mutate the
//!   collection between events.
//! - [`AddPolicy`](types::AddPolicy): the should-add predicate. The default,
//!   [`UniqueTags`](types::UniqueTags), rejects exact-match duplicates.
//!
//! ## Deferred commits
//!
//! Committing typed text into the bound model is a two-step affair:
//! [`TagsInput::text_changed`](input::TagsInput::text_changed) only *stages*
//! a candidate, and [`TagsInput::commit`](input::TagsInput::commit) applies
//! it on the host's next tick. This keeps the model untouched while the
//! toolkit is mid-update; layout and selection work stays synchronous.
//!
//! ## Minimal example
//!
//! ```
//! use chipflow_input::input::TagsInput;
//! use chipflow_input::types::{Selection, TagEvent};
//!
//! let mut tags: Vec<String> = Vec::new();
//! let mut input = TagsInput::new();
//!
//! // Typing "rust " commits the token on the separator keystroke.
//! input.text_changed("rust ");
//! assert_eq!(input.commit(&mut tags), Some(TagEvent::Added { index: 0 }));
//! assert_eq!(tags, ["rust"]);
//!
//! // Backspace on the now-empty field selects the last chip...
//! let _ = input.backspace(&mut tags);
//! assert_eq!(input.selection(), Selection::Selected(0));
//!
//! // ...and a second backspace deletes it.
//! assert_eq!(input.backspace(&mut tags), Some(TagEvent::Removed { index: 0 }));
//! assert!(tags.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod input;
pub mod parser;
pub mod types;
