// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flow layout basics.
//!
//! Lays a handful of chip sizes into a narrow container and prints each
//! origin, the width granted to the trailing field, and the content height.
//!
//! Run:
//! - `cargo run -p chipflow_demos --example flow_basics`

use chipflow_layout::{FlowOptions, content_height, remaining_field_width, solve};
use kurbo::Size;

fn main() {
    let opts = FlowOptions::default();
    let max_width = 240.0;
    let chips = vec![
        Size::new(72.0, 28.0),
        Size::new(48.0, 28.0),
        Size::new(110.0, 28.0),
        Size::new(60.0, 28.0),
    ];

    let solution = solve(&chips, 28.0, max_width, &opts);
    println!("== Container width {max_width} ==");
    for (i, (origin, size)) in solution.chip_origins.iter().zip(&chips).enumerate() {
        println!("  chip {i}: origin=({}, {})  w={}", origin.x, origin.y, size.width);
    }
    println!(
        "  field: origin=({}, {})  width={}",
        solution.field_origin.x, solution.field_origin.y, solution.field_width
    );
    println!("  height: {}", solution.height);

    // The standalone queries agree with the combined pass.
    println!(
        "  remaining_field_width = {}",
        remaining_field_width(&chips, max_width, &opts)
    );
    println!(
        "  content_height (chips only) = {}",
        content_height(&chips, max_width, &opts)
    );
}
