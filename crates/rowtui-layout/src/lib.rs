#![forbid(unsafe_code)]

//! Horizontal arrangement for terminal UIs.
//!
//! This crate provides the row-placement half of a layout engine:
//!
//! - [`arrange_horizontal`] - place an ordered row of siblings left to right
//! - [`BoxModel`] / [`resolve_box_model`] - per-element box-model resolution
//! - [`ChildStyle`], [`WidthSpec`], [`VerticalAlign`] - per-element styling
//!
//! Widths may be fixed, fraction-weighted, or intrinsic; fraction weights are
//! resolved through a shared exact-rational unit so rounding only happens when
//! the final regions are built. Margins between neighbors collapse to the
//! larger of the two.
//!
//! Note: the fraction unit is derived from the available *height*, matching
//! the vertical arranger this engine is paired with. Horizontal fraction
//! distribution therefore scales with row height, not row width.
//!
//! # Example
//!
//! ```
//! use rowtui_layout::{
//!     ChildStyle, LayoutElement, Size, WidthSpec, arrange_horizontal, resolve_box_model,
//! };
//!
//! let children = [
//!     ChildStyle {
//!         width: Some(WidthSpec::Cells(10)),
//!         ..Default::default()
//!     },
//!     ChildStyle {
//!         width: Some(WidthSpec::Cells(20)),
//!         ..Default::default()
//!     },
//! ];
//! let size = Size::new(80, 5);
//!
//! let result = arrange_horizontal(size, size, &children, |_| true, |child, _, _, unit| {
//!     resolve_box_model(&child.style(), Size::new(0, 5), unit)
//! })
//! .unwrap();
//!
//! // One placement per child plus the row's bounding box.
//! assert_eq!(result.placements.len(), 3);
//! assert_eq!(result.bounds().width, 30);
//! ```

pub mod box_model;
pub mod horizontal;
pub mod style;

pub use box_model::{BoxModel, ResolveError, Scalar, resolve_box_model};
pub use horizontal::{ArrangeResult, WidgetPlacement, arrange_horizontal};
pub use rowtui_core::geometry::{Offset, Region, Sides, Size};
pub use style::{ChildStyle, LayoutElement, VerticalAlign, WidthSpec};
