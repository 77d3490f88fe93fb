// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transient line-wrap cursor shared by every layout entry point.

use kurbo::{Point, Size};

use crate::flow::FlowOptions;

/// Line-wrap cursor for a single layout pass.
///
/// Tracks the running x offset on the current line, the y offset of the
/// current line, and the tallest item placed on it. A cursor is created at
/// the start of a pass and discarded at the end; it is never stored between
/// passes, so layout stays a pure function of its inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlowCursor {
    /// Running x offset on the current line, past all placed items and
    /// their trailing spacing.
    pub x: f64,
    /// Y offset of the current line's top edge.
    pub y: f64,
    /// Height of the tallest item placed on the current line.
    pub line_height: f64,
}

impl FlowCursor {
    /// Create a cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an item of `width` overflows the current line.
    ///
    /// Items at the start of a line never overflow: an item wider than the
    /// container still occupies its own line at x = 0, without shrinking.
    pub fn overflows(&self, width: f64, max_width: f64) -> bool {
        self.x > 0.0 && self.x + width > max_width
    }

    /// Move to the start of the next line.
    pub fn wrap(&mut self, line_spacing: f64) {
        self.x = 0.0;
        self.y += self.line_height + line_spacing;
        self.line_height = 0.0;
    }

    /// Place an item of `size`, wrapping first if it would overflow, and
    /// return the item's origin.
    pub fn place(&mut self, size: Size, max_width: f64, options: &FlowOptions) -> Point {
        if self.overflows(size.width, max_width) {
            self.wrap(options.line_spacing);
        }
        let origin = Point::new(self.x, self.y);
        self.line_height = self.line_height.max(size.height);
        self.x += size.width + options.item_spacing;
        origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> FlowOptions {
        FlowOptions {
            item_spacing: 4.0,
            line_spacing: 0.0,
            min_field_width: 30.0,
        }
    }

    #[test]
    fn places_left_to_right_with_spacing() {
        let mut c = FlowCursor::new();
        let a = c.place(Size::new(10.0, 5.0), 100.0, &opts());
        let b = c.place(Size::new(10.0, 8.0), 100.0, &opts());
        assert_eq!(a, Point::new(0.0, 0.0));
        assert_eq!(b, Point::new(14.0, 0.0));
        assert_eq!(c.line_height, 8.0);
    }

    #[test]
    fn wraps_when_item_would_overflow() {
        let mut c = FlowCursor::new();
        let _ = c.place(Size::new(90.0, 10.0), 100.0, &opts());
        let b = c.place(Size::new(20.0, 10.0), 100.0, &opts());
        assert_eq!(b, Point::new(0.0, 10.0));
    }

    #[test]
    fn oversize_item_stays_on_its_own_line() {
        let mut c = FlowCursor::new();
        let a = c.place(Size::new(150.0, 10.0), 100.0, &opts());
        assert_eq!(a, Point::new(0.0, 0.0), "no shrink, no truncation");
        let b = c.place(Size::new(10.0, 10.0), 100.0, &opts());
        assert_eq!(b, Point::new(0.0, 10.0));
    }

    #[test]
    fn wrap_applies_line_spacing() {
        let mut c = FlowCursor::new();
        let spaced = FlowOptions {
            line_spacing: 6.0,
            ..opts()
        };
        let _ = c.place(Size::new(90.0, 10.0), 100.0, &spaced);
        let b = c.place(Size::new(20.0, 10.0), 100.0, &spaced);
        assert_eq!(b, Point::new(0.0, 16.0));
    }
}
