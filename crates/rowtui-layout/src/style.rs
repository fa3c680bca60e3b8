#![forbid(unsafe_code)]

//! Per-element styles consulted by the arranger.

use rowtui_core::geometry::Sides;

/// Width specification for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthSpec {
    /// An exact width in cells.
    Cells(u16),
    /// A proportional weight, resolved against fraction-typed siblings via
    /// the shared fraction unit.
    Fraction(u32),
    /// Size to the element's intrinsic content width.
    Auto,
}

impl WidthSpec {
    /// Check if this width participates in proportional distribution.
    #[inline]
    pub const fn is_fraction(self) -> bool {
        matches!(self, WidthSpec::Fraction(_))
    }

    /// Weight for proportional distribution, `None` unless fraction-typed.
    #[inline]
    pub const fn fraction_weight(self) -> Option<u32> {
        match self {
            WidthSpec::Fraction(weight) => Some(weight),
            _ => None,
        }
    }
}

/// Vertical alignment of an element's content within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    /// Align to the top of the row.
    #[default]
    Top,
    /// Center within the available height.
    Middle,
    /// Align to the bottom of the row.
    Bottom,
}

impl VerticalAlign {
    /// Offset of the content's top edge within the available vertical space.
    ///
    /// `available_height` is the row height minus the element's vertical
    /// margins and may be negative when the row is overfull; the returned
    /// offset is then negative as well and the caller decides how to clip.
    #[must_use]
    pub fn offset(self, content_height: i64, available_height: i64) -> i64 {
        match self {
            VerticalAlign::Top => 0,
            VerticalAlign::Middle => (available_height - content_height).div_euclid(2),
            VerticalAlign::Bottom => available_height - content_height,
        }
    }
}

/// Style snapshot for one child, read once per arrangement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChildStyle {
    /// Declared width, `None` when the stylesheet leaves it unset.
    pub width: Option<WidthSpec>,
    /// Vertical alignment within the row.
    pub align: VerticalAlign,
    /// Margin requested around the element.
    pub margin: Sides,
}

/// An element that can participate in arrangement.
///
/// Hosts implement this for their widget handle type; the arranger only ever
/// reads the style snapshot.
pub trait LayoutElement {
    /// Style snapshot for the current pass.
    fn style(&self) -> ChildStyle;
}

// A bare style is its own element, which keeps tests and small hosts simple.
impl LayoutElement for ChildStyle {
    fn style(&self) -> ChildStyle {
        *self
    }
}
