// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flow layout over an explicit ordered list of item sizes.
//!
//! ## Overview
//!
//! All entry points are pure functions of `(sizes, container width, options)`.
//! Positions are computed in a single forward pass with a [`FlowCursor`];
//! there is no per-item recomputation and no state carried between calls.
//!
//! The trailing text field is not an item like the others: its width is
//! *derived* from the space left on the chips' last line, falling back to a
//! full-width line of its own when the remainder drops below
//! [`FlowOptions::min_field_width`]. Use [`remaining_field_width`] for the
//! width alone or [`solve`] for the whole row (chip origins, field slot, and
//! content height) in one pass.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::cursor::FlowCursor;

/// Spacing and sizing knobs for a flow pass.
///
/// The defaults match a comfortable chip row: 8 units between items, 6
/// between lines, and a 60-unit floor before the field wraps to its own line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowOptions {
    /// Horizontal gap between adjacent items on a line.
    pub item_spacing: f64,
    /// Vertical gap between lines.
    pub line_spacing: f64,
    /// Smallest usable field width; anything narrower wraps the field to a
    /// full-width line.
    pub min_field_width: f64,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            item_spacing: 8.0,
            line_spacing: 6.0,
            min_field_width: 60.0,
        }
    }
}

/// A full row solution: chip origins, the trailing field's slot, and the
/// total content height.
///
/// Produced by [`solve`]. `chip_origins` is index-aligned with the input
/// sizes.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowSolution {
    /// Origin of each chip, in input order.
    pub chip_origins: Vec<Point>,
    /// Origin of the trailing text field.
    pub field_origin: Point,
    /// Width granted to the trailing text field.
    pub field_width: f64,
    /// Height of the laid-out content, including the field's line.
    pub height: f64,
}

/// Compute each item's origin under line-wrap semantics.
///
/// Items are placed left-to-right, top-down; an item that would overflow the
/// container starts a new line. An item wider than the container is placed
/// alone at x = 0 — clipping it is the renderer's concern, not layout's.
pub fn compute_positions(sizes: &[Size], max_width: f64, options: &FlowOptions) -> Vec<Point> {
    let mut cursor = FlowCursor::new();
    sizes
        .iter()
        .map(|&size| cursor.place(size, max_width, options))
        .collect()
}

/// Width available to the trailing text field on the chips' current line.
///
/// `chips` must exclude the field's own (stale) measurement. Returns the
/// container width when there are no chips, when the remainder falls at or
/// below [`FlowOptions::min_field_width`], or when the remainder is negative
/// — in each case the field takes a full line.
pub fn remaining_field_width(chips: &[Size], max_width: f64, options: &FlowOptions) -> f64 {
    if chips.is_empty() {
        return max_width;
    }
    let mut cursor = FlowCursor::new();
    for &size in chips {
        let _ = cursor.place(size, max_width, options);
    }
    field_width_at(cursor.x, max_width, options)
}

/// Total height of the laid-out items, for hosts whose container does not
/// self-size. Zero for an empty list.
pub fn content_height(sizes: &[Size], max_width: f64, options: &FlowOptions) -> f64 {
    if sizes.is_empty() {
        return 0.0;
    }
    let mut cursor = FlowCursor::new();
    for &size in sizes {
        let _ = cursor.place(size, max_width, options);
    }
    cursor.y + cursor.line_height
}

/// Lay out a whole row in one pass: chip origins, then the trailing field.
///
/// `field_height` is the field's measured height (it only affects the line
/// height of the field's line, and thereby the total height). The field is
/// placed like any other item, using the width from the same rules as
/// [`remaining_field_width`], so a full-width field lands on a fresh line.
pub fn solve(
    chips: &[Size],
    field_height: f64,
    max_width: f64,
    options: &FlowOptions,
) -> FlowSolution {
    let mut cursor = FlowCursor::new();
    let chip_origins: Vec<Point> = chips
        .iter()
        .map(|&size| cursor.place(size, max_width, options))
        .collect();
    let field_width = if chips.is_empty() {
        max_width
    } else {
        field_width_at(cursor.x, max_width, options)
    };
    let field_origin = cursor.place(Size::new(field_width, field_height), max_width, options);
    FlowSolution {
        chip_origins,
        field_origin,
        field_width,
        height: cursor.y + cursor.line_height,
    }
}

fn field_width_at(last_x: f64, max_width: f64, options: &FlowOptions) -> f64 {
    // A degenerate (negative) remainder also falls through to the full
    // container width; never hand the host a negative size.
    let remaining = max_width - last_x - 2.0 * options.item_spacing;
    if remaining > options.min_field_width {
        remaining
    } else {
        max_width
    }
}
