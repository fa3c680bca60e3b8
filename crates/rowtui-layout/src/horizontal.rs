#![forbid(unsafe_code)]

//! Horizontal arrangement: place a row of siblings left to right inside a
//! bounded area.
//!
//! The pass reconciles fixed, fraction-weighted, and intrinsic widths into
//! one deterministic sweep, collapsing margins between neighbors and aligning
//! each element vertically within the row. It is pure: no I/O, no state
//! between calls, and the only failure mode is a propagated resolver error.

use num_rational::Ratio;
use rowtui_core::geometry::{Region, Size};

use crate::box_model::{BoxModel, ResolveError, Scalar};
use crate::style::LayoutElement;

/// One resolved placement for an arrangement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetPlacement {
    /// Screen region assigned to the element.
    pub region: Region,
    /// Index of the element in the input child slice; `None` for the
    /// synthetic placement covering the whole row.
    pub widget: Option<usize>,
    /// Z layer. Always 0 for this pass.
    pub order: i32,
}

/// Output of one horizontal arrangement pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrangeResult {
    /// Placements in child order, with the aggregate row bounds last.
    pub placements: Vec<WidgetPlacement>,
    /// Indices of the displayed children, in input order.
    pub displayed: Vec<usize>,
}

impl ArrangeResult {
    /// The synthetic placement covering all placed elements.
    ///
    /// Present even for an empty child list, where it is zero-sized.
    #[must_use]
    pub fn bounds(&self) -> Region {
        self.placements.last().map_or(Region::default(), |p| p.region)
    }

    /// Placements that belong to elements, excluding the trailing bounds.
    #[must_use]
    pub fn widget_placements(&self) -> &[WidgetPlacement] {
        let len = self.placements.len();
        &self.placements[..len.saturating_sub(1)]
    }
}

/// Arrange `children` left to right within `size`.
///
/// `size` is the space available for this pass and `parent_size` the parent's
/// actual size; the fraction unit is derived from `size.height` divided by the
/// total fraction weight. Deriving a horizontal unit from the height mirrors
/// the vertical arranger's counterpart and is kept for compatibility; see the
/// crate docs before changing it.
///
/// `is_displayed` marks the children eligible for placement. Hidden children
/// still resolve a box model and participate in margin collapse so spacing
/// stays consistent with the full child list, but they receive no placement.
///
/// `resolver` is invoked once per child, in child order, with
/// `(child, size, parent_size, fraction_unit)`. Its first error aborts the
/// pass and is returned verbatim.
///
/// The returned placements are in child order, followed by one synthetic
/// placement covering the row's bounding box.
pub fn arrange_horizontal<W, D, R>(
    size: Size,
    parent_size: Size,
    children: &[W],
    mut is_displayed: D,
    mut resolver: R,
) -> Result<ArrangeResult, ResolveError>
where
    W: LayoutElement,
    D: FnMut(&W) -> bool,
    R: FnMut(&W, Size, Size, Scalar) -> Result<BoxModel, ResolveError>,
{
    let zero = Scalar::from_integer(0);

    // Fraction unit: height divided by the summed fraction weights, exact.
    // A denominator guard of 1 covers the no-fractions case; nothing consumes
    // the unit then.
    let total_fraction: i64 = children
        .iter()
        .filter_map(|child| child.style().width)
        .filter_map(|width| width.fraction_weight())
        .map(i64::from)
        .sum();
    let fraction_unit = Ratio::new(i64::from(size.height), total_fraction.max(1));

    rowtui_core::trace!(
        children = children.len(),
        total_fraction,
        "arrange horizontal row"
    );

    // Box models for the FULL child list, in order. Margin collapse below
    // needs full adjacency, displayed or not.
    let mut box_models = Vec::with_capacity(children.len());
    for child in children {
        box_models.push(resolver(child, size, parent_size, fraction_unit)?);
    }

    // Adjacent margins collapse to the larger of the two. The last element's
    // right margin trails uncollapsed.
    let mut gaps: Vec<u16> = box_models
        .windows(2)
        .map(|pair| pair[0].margin.right.max(pair[1].margin.left))
        .collect();
    if let Some(last) = box_models.last() {
        gaps.push(last.margin.right);
    }

    let mut x = box_models
        .first()
        .map_or(zero, |first| Scalar::from_integer(i64::from(first.margin.left)));

    let displayed: Vec<usize> = children
        .iter()
        .enumerate()
        .filter(|&(_, child)| is_displayed(child))
        .map(|(index, _)| index)
        .collect();

    let mut placements = Vec::with_capacity(displayed.len() + 1);
    let mut max_width = zero;
    let mut max_height = zero;

    // The i-th displayed child pairs with the i-th box model and gap as
    // produced from the full list; positional correspondence is part of the
    // contract.
    for ((child_index, box_model), gap) in displayed
        .iter()
        .copied()
        .zip(&box_models)
        .zip(gaps.iter().copied())
    {
        let style = children[child_index].style();
        let content_width = box_model.width;
        let content_height = box_model.height;

        // Vertical alignment sees the row height minus this element's own
        // vertical margins; the remainder may be negative when overfull.
        let available_height =
            i64::from(size.height) - i64::from(box_model.margin.vertical_sum());
        let offset_y = style
            .align
            .offset(content_height.to_integer(), available_height)
            + i64::from(box_model.margin.top);

        let next_x = x + content_width;
        let left = x.to_integer();
        let region = Region::new(
            clamp_coord(left),
            clamp_coord(offset_y),
            clamp_extent((next_x - Scalar::from_integer(left)).to_integer()),
            clamp_extent(content_height.to_integer()),
        );

        max_height = max_height.max(content_height);
        placements.push(WidgetPlacement {
            region,
            widget: Some(child_index),
            order: 0,
        });

        x = next_x + Scalar::from_integer(i64::from(gap));
        max_width = x;
    }

    // Synthetic bounding placement, always last and never tied to an element.
    placements.push(WidgetPlacement {
        region: Region::new(
            0,
            0,
            clamp_extent(max_width.to_integer()),
            clamp_extent(max_height.to_integer()),
        ),
        widget: None,
        order: 0,
    });

    Ok(ArrangeResult {
        placements,
        displayed,
    })
}

/// Clamp an exact coordinate into the signed cell range.
#[inline]
fn clamp_coord(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Clamp an exact extent to a valid non-negative cell count.
///
/// Negative spans (overfull margins) normalize to zero instead of producing
/// an invalid region.
#[inline]
fn clamp_extent(value: i64) -> u16 {
    value.clamp(0, i64::from(u16::MAX)) as u16
}
