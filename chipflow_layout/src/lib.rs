// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chipflow Layout: a Kurbo-native wrapping flow layout for chip rows.
//!
//! Chipflow Layout is the geometry half of a "tags input" control: an ordered
//! row of variable-width chips followed by a text field, placed left-to-right
//! and wrapping to a new line when the next item would exceed the container's
//! width — the same reflow a paragraph of words undergoes.
//!
//! - Computes each item's origin from an explicit ordered list of sizes.
//! - Computes the width left over for the trailing text field on its line,
//!   with a configurable minimum before the field drops to a full-width line.
//! - Computes total content height so a host can size a non-self-sizing
//!   container.
//! - Tracks asynchronously reported item sizes in a generationally keyed
//!   [`Measurements`] store with batched [`Measurements::commit`] dirty flags.
//!
//! ## Not a renderer
//!
//! This crate draws nothing and measures nothing itself. The rendering host
//! realizes chips on screen, reports their sizes into [`Measurements`], and
//! consumes the origins computed here on its next pass. Sizes therefore lag
//! the model by up to one frame; every entry point tolerates missing or stale
//! entries rather than blocking on them.
//!
//! ## Layout is a pure function
//!
//! Every pass starts from a fresh [`FlowCursor`]. There is no layout state
//! shared between calls: identical `(sizes, container width, options)` inputs
//! always produce identical outputs.
//!
//! # Example
//!
//! ```rust
//! use chipflow_layout::{FlowOptions, compute_positions, remaining_field_width};
//! use kurbo::{Point, Size};
//!
//! let opts = FlowOptions {
//!     item_spacing: 4.0,
//!     line_spacing: 0.0,
//!     min_field_width: 30.0,
//! };
//!
//! // Three 40-wide chips in a 100-wide container: two fit on the first
//! // line, the third wraps.
//! let chips = [
//!     Size::new(40.0, 20.0),
//!     Size::new(40.0, 20.0),
//!     Size::new(40.0, 20.0),
//! ];
//! let origins = compute_positions(&chips, 100.0, &opts);
//! assert_eq!(
//!     origins,
//!     vec![Point::new(0.0, 0.0), Point::new(44.0, 0.0), Point::new(0.0, 20.0)]
//! );
//!
//! // The trailing field shares the second line with the wrapped chip.
//! assert_eq!(remaining_field_width(&chips, 100.0, &opts), 48.0);
//! ```
//!
//! ## Two-phase measurement
//!
//! ```rust
//! use chipflow_layout::{Dirty, Measurements};
//! use kurbo::Size;
//!
//! let mut measurements = Measurements::new();
//! let chip = measurements.insert();
//!
//! // Render pass: the host reports the realized size.
//! measurements.report(chip, Size::new(40.0, 20.0));
//!
//! // Layout pass: consume the batch and re-layout if anything changed.
//! let dirty = measurements.commit();
//! assert!(dirty.contains(Dirty::SIZES));
//! assert_eq!(measurements.get(chip), Some(Size::new(40.0, 20.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cursor;
mod flow;
mod measure;

pub use cursor::FlowCursor;
pub use flow::{
    FlowOptions, FlowSolution, compute_positions, content_height, remaining_field_width, solve,
};
pub use measure::{Dirty, ItemKey, Measurements};
