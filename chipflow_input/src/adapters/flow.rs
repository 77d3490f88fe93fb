// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter glue for Chipflow Layout: styling surface and per-frame geometry.
//!
//! ## Feature
//!
//! Enable with `flow_adapter`.
//!
//! ## Notes
//!
//! The interaction core and the layout engine never talk to each other
//! directly; this module joins them for hosts that use both. Each frame, the
//! host reports realized sizes into a
//! [`Measurements`](chipflow_layout::Measurements) store and calls
//! [`solve_geometry`] to get chip origins, the text field's slot, and the
//! content height for the coming frame. Items whose measurement has not
//! arrived yet are skipped and pick up a position one frame later.

use alloc::string::String;
use alloc::vec::Vec;

use chipflow_layout::{FlowOptions, ItemKey, Measurements, solve};
use kurbo::{Insets, Point};
use peniko::Color;

/// Styling configuration for a rendered tags row.
///
/// Purely presentational except for the spacing fields, which feed the flow
/// engine via [`TagsStyle::flow_options`]. Defaults follow the reference
/// widget: quiet gray chips that light up in the accent color when selected.
#[derive(Clone, Debug, PartialEq)]
pub struct TagsStyle {
    /// Padding between a chip's text and its edges.
    pub chip_insets: Insets,
    /// Chip corner radius.
    pub corner_radius: f64,
    /// Font size for chip text and the field.
    pub font_size: f64,
    /// Chip text color.
    pub text_color: Color,
    /// Chip text color while selected.
    pub selected_text_color: Color,
    /// Chip background color.
    pub background_color: Color,
    /// Chip background color while selected.
    pub selected_color: Color,
    /// Caret/accent color for the text field.
    pub tint_color: Color,
    /// Placeholder shown while the collection is empty.
    pub placeholder: String,
    /// Character that commits the current buffer into a tag.
    pub separator: char,
    /// Horizontal gap between chips.
    pub item_spacing: f64,
    /// Vertical gap between lines.
    pub line_spacing: f64,
    /// Smallest usable field width before it wraps to its own line.
    pub min_field_width: f64,
}

impl Default for TagsStyle {
    fn default() -> Self {
        Self {
            chip_insets: Insets::new(14.0, 6.0, 14.0, 6.0),
            corner_radius: 8.0,
            font_size: 14.0,
            text_color: Color::from_rgb8(128, 128, 128),
            selected_text_color: Color::from_rgb8(255, 255, 255),
            background_color: Color::from_rgb8(245, 245, 245),
            selected_color: Color::from_rgb8(0, 122, 255),
            tint_color: Color::from_rgb8(0, 122, 255),
            placeholder: String::from("Add a tag"),
            separator: ' ',
            item_spacing: 8.0,
            line_spacing: 6.0,
            min_field_width: 60.0,
        }
    }
}

impl TagsStyle {
    /// The subset of this style the flow engine consumes.
    pub fn flow_options(&self) -> FlowOptions {
        FlowOptions {
            item_spacing: self.item_spacing,
            line_spacing: self.line_spacing,
            min_field_width: self.min_field_width,
        }
    }
}

/// One chip's placement for the coming frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChipSlot {
    /// The chip's measurement key.
    pub key: ItemKey,
    /// Top-left origin within the container.
    pub origin: Point,
}

/// The trailing text field's placement and granted width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldSlot {
    /// Top-left origin within the container.
    pub origin: Point,
    /// Width the field should occupy.
    pub width: f64,
}

/// Per-frame geometry for the whole row.
#[derive(Clone, Debug, PartialEq)]
pub struct TagsGeometry {
    /// Measured chips in model order. Chips without a measurement yet are
    /// absent and will appear once their size is reported.
    pub chips: Vec<ChipSlot>,
    /// The text field's slot.
    pub field: FieldSlot,
    /// Content height, for hosts whose container does not self-size.
    pub height: f64,
}

/// Join the measurement store and the flow engine into row geometry.
///
/// `chip_keys` is the model-ordered key list; `field_key` is the field's own
/// slot in the store (its stale width is deliberately ignored — the field's
/// width is derived from the chips, only its measured height is used).
pub fn solve_geometry(
    measurements: &Measurements,
    chip_keys: &[ItemKey],
    field_key: ItemKey,
    max_width: f64,
    options: &FlowOptions,
) -> TagsGeometry {
    let mut keys = Vec::with_capacity(chip_keys.len());
    let mut sizes = Vec::with_capacity(chip_keys.len());
    for &key in chip_keys {
        if let Some(size) = measurements.get(key) {
            keys.push(key);
            sizes.push(size);
        }
    }
    let field_height = measurements.get(field_key).map_or(0.0, |s| s.height);
    let solution = solve(&sizes, field_height, max_width, options);
    let chips = keys
        .into_iter()
        .zip(solution.chip_origins)
        .map(|(key, origin)| ChipSlot { key, origin })
        .collect();
    TagsGeometry {
        chips,
        field: FieldSlot {
            origin: solution.field_origin,
            width: solution.field_width,
        },
        height: solution.height,
    }
}
