// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-phase measurement protocol, frame by frame.
//!
//! Simulates a host adding a tag whose size arrives one render pass late:
//! the new chip sits out the first layout, then shows up once its
//! measurement lands.
//!
//! Run:
//! - `cargo run -p chipflow_demos --example measure_two_phase`

use chipflow_input::adapters::flow::solve_geometry;
use chipflow_layout::{FlowOptions, Measurements};
use kurbo::Size;

fn main() {
    let opts = FlowOptions::default();
    let mut measurements = Measurements::new();

    // Frame 0: one chip and the field, both measured last frame.
    let first = measurements.insert();
    let field = measurements.insert();
    measurements.report(first, Size::new(64.0, 28.0));
    measurements.report(field, Size::new(80.0, 28.0));
    let _ = measurements.commit();

    // The model gains a second tag; no size for it yet.
    let second = measurements.insert();
    let chips = [first, second];

    let g = solve_geometry(&measurements, &chips, field, 320.0, &opts);
    println!("== Frame 1 (second chip unmeasured) ==");
    println!("  placed chips: {}", g.chips.len());
    println!("  field width: {}", g.field.width);

    // Render pass reports the new chip; the next layout includes it.
    measurements.report(second, Size::new(96.0, 28.0));
    let dirty = measurements.commit();
    println!("== Frame 2 (dirty: {dirty:?}) ==");
    let g = solve_geometry(&measurements, &chips, field, 320.0, &opts);
    for slot in &g.chips {
        println!("  chip at ({}, {})", slot.origin.x, slot.origin.y);
    }
    println!("  field width: {}", g.field.width);
    println!("  height: {}", g.height);
}
