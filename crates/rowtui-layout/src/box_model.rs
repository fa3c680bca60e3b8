#![forbid(unsafe_code)]

//! Box-model resolution: turning a style snapshot into concrete content
//! extents plus margin for one arrangement pass.

use std::fmt;

use num_rational::Ratio;
use rowtui_core::geometry::{Sides, Size};

use crate::style::{ChildStyle, WidthSpec};

/// Exact rational scalar for intermediate layout arithmetic.
///
/// Fractional widths stay exact until a region is constructed, so rounding
/// error does not compound across many fraction-weighted siblings.
pub type Scalar = Ratio<i64>;

/// Resolved content extents plus margin for one element.
///
/// Immutable once produced for a given arrangement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxModel {
    /// Content width, exact rational.
    pub width: Scalar,
    /// Content height, exact rational.
    pub height: Scalar,
    /// Margin around the content.
    pub margin: Sides,
}

impl BoxModel {
    /// Create a box model from exact rational extents.
    pub fn new(width: Scalar, height: Scalar, margin: Sides) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Create a box model with integral extents.
    pub fn from_cells(width: u16, height: u16, margin: Sides) -> Self {
        Self {
            width: Scalar::from_integer(i64::from(width)),
            height: Scalar::from_integer(i64::from(height)),
            margin,
        }
    }
}

/// Failure to turn a child's style into a concrete box model.
///
/// The arrangement pass aborts on the first resolution failure and propagates
/// it verbatim; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A fraction-typed width declared a zero weight.
    ZeroFractionWeight,
    /// A host-specific style rejection.
    InvalidStyle {
        /// Host-provided description of the rejected style.
        detail: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFractionWeight => {
                write!(f, "fraction width requires a positive weight")
            }
            Self::InvalidStyle { detail } => write!(f, "invalid style: {detail}"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolve a box model from a style snapshot and intrinsic content size.
///
/// This is the reference resolver for hosts without a richer style system:
///
/// - [`WidthSpec::Cells`] widths are taken verbatim;
/// - [`WidthSpec::Fraction`] widths multiply their weight by `fraction_unit`;
/// - [`WidthSpec::Auto`] and unset widths fall back to the intrinsic width.
///
/// The content height is always the intrinsic height; content measurement
/// itself happens upstream.
pub fn resolve_box_model(
    style: &ChildStyle,
    intrinsic: Size,
    fraction_unit: Scalar,
) -> Result<BoxModel, ResolveError> {
    let width = match style.width {
        Some(WidthSpec::Cells(cells)) => Scalar::from_integer(i64::from(cells)),
        Some(WidthSpec::Fraction(weight)) => {
            if weight == 0 {
                return Err(ResolveError::ZeroFractionWeight);
            }
            fraction_unit * Scalar::from_integer(i64::from(weight))
        }
        Some(WidthSpec::Auto) | None => Scalar::from_integer(i64::from(intrinsic.width)),
    };
    let height = Scalar::from_integer(i64::from(intrinsic.height));

    Ok(BoxModel {
        width: width.max(Scalar::from_integer(0)),
        height,
        margin: style.margin,
    })
}

#[cfg(test)]
mod tests {
    use super::{BoxModel, ResolveError, Scalar, resolve_box_model};
    use crate::style::{ChildStyle, WidthSpec};
    use rowtui_core::geometry::{Sides, Size};

    fn unit(numer: i64, denom: i64) -> Scalar {
        Scalar::new(numer, denom)
    }

    #[test]
    fn cells_width_is_exact() {
        let style = ChildStyle {
            width: Some(WidthSpec::Cells(12)),
            ..Default::default()
        };
        let bm = resolve_box_model(&style, Size::new(3, 1), unit(5, 1)).unwrap();
        assert_eq!(bm.width, Scalar::from_integer(12));
        assert_eq!(bm.height, Scalar::from_integer(1));
    }

    #[test]
    fn fraction_width_scales_by_unit() {
        let style = ChildStyle {
            width: Some(WidthSpec::Fraction(3)),
            ..Default::default()
        };
        let bm = resolve_box_model(&style, Size::new(0, 2), unit(10, 4)).unwrap();
        assert_eq!(bm.width, unit(30, 4));
    }

    #[test]
    fn fraction_width_stays_rational() {
        let style = ChildStyle {
            width: Some(WidthSpec::Fraction(1)),
            ..Default::default()
        };
        let bm = resolve_box_model(&style, Size::new(0, 0), unit(10, 3)).unwrap();
        assert_eq!(bm.width, unit(10, 3));
        assert_ne!(bm.width, Scalar::from_integer(3));
    }

    #[test]
    fn auto_and_unset_use_intrinsic_width() {
        let auto = ChildStyle {
            width: Some(WidthSpec::Auto),
            ..Default::default()
        };
        let unset = ChildStyle::default();
        let intrinsic = Size::new(7, 2);
        let a = resolve_box_model(&auto, intrinsic, unit(5, 1)).unwrap();
        let u = resolve_box_model(&unset, intrinsic, unit(5, 1)).unwrap();
        assert_eq!(a.width, Scalar::from_integer(7));
        assert_eq!(u.width, Scalar::from_integer(7));
    }

    #[test]
    fn zero_fraction_weight_is_rejected() {
        let style = ChildStyle {
            width: Some(WidthSpec::Fraction(0)),
            ..Default::default()
        };
        let err = resolve_box_model(&style, Size::new(0, 0), unit(5, 1)).unwrap_err();
        assert_eq!(err, ResolveError::ZeroFractionWeight);
    }

    #[test]
    fn margin_is_copied_from_style() {
        let style = ChildStyle {
            width: Some(WidthSpec::Cells(1)),
            margin: Sides::new(1, 2, 3, 4),
            ..Default::default()
        };
        let bm = resolve_box_model(&style, Size::new(0, 0), unit(1, 1)).unwrap();
        assert_eq!(bm.margin, Sides::new(1, 2, 3, 4));
    }

    #[test]
    fn from_cells_matches_new() {
        let bm = BoxModel::from_cells(4, 9, Sides::all(1));
        assert_eq!(
            bm,
            BoxModel::new(
                Scalar::from_integer(4),
                Scalar::from_integer(9),
                Sides::all(1)
            )
        );
    }

    #[test]
    fn resolve_error_display() {
        assert_eq!(
            ResolveError::ZeroFractionWeight.to_string(),
            "fraction width requires a positive weight"
        );
        let err = ResolveError::InvalidStyle {
            detail: "width: -3".into(),
        };
        assert_eq!(err.to_string(), "invalid style: width: -3");
    }
}
