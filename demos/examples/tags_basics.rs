// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tags-input basics.
//!
//! This minimal example drives the interaction core with a scripted session:
//! typing two tags, a rejected duplicate, then the backspace select/delete
//! dance.
//!
//! Run:
//! - `cargo run -p chipflow_demos --example tags_basics`

use chipflow_input::input::TagsInput;
use chipflow_input::types::TagStore;

fn tick(input: &mut TagsInput, tags: &mut Vec<String>) {
    // The host flushes staged commits once per tick, never mid-render.
    if let Some(event) = input.commit(tags) {
        println!("  event: {event:?}");
    }
}

fn main() {
    let mut tags: Vec<String> = Vec::new();
    let mut input = TagsInput::new();

    println!("== Typing \"rust \" then \"ui \" ==");
    for text in ["r", "ru", "rus", "rust", "rust ", "u", "ui", "ui "] {
        let _ = input.text_changed(text);
        tick(&mut input, &mut tags);
    }
    println!("  tags: {tags:?}");

    println!("== Typing the duplicate \"rust \" ==");
    let _ = input.text_changed("rust ");
    tick(&mut input, &mut tags);
    println!("  tags: {tags:?} (unchanged, buffer swallowed)");

    println!("== Backspace twice on the empty field ==");
    for _ in 0..2 {
        if let Some(event) = input.backspace(&mut tags) {
            println!("  event: {event:?}");
        }
    }
    println!("  tags: {tags:?}");

    println!("== Tap chip 0, then backspace ==");
    let _ = input.tap_chip(0, &tags);
    if let Some(event) = input.backspace(&mut tags) {
        println!("  event: {event:?}");
    }
    println!("  tags: {tags:?} (empty: {})", TagStore::is_empty(&tags));
}
