//! Keeps the cursor between the first and last segment centers.
//!
//! Every path that can move the cursor (drag, release, relayout) goes through
//! [`is_out_of_bound`], so the boundary arithmetic lives in one place.

use scaleview_ui::Px;

use super::{
    bounds::{cursor_max_x, cursor_min_x},
    layout::{GeometrySnapshot, SegmentAnchors, SegmentBounds},
};

/// Which end of the scale a boundary test refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The first segment's center.
    Min,
    /// The last segment's center.
    Max,
}

impl Bound {
    /// The segment this bound is anchored to.
    pub fn anchor(self, anchors: &SegmentAnchors) -> SegmentBounds {
        match self {
            Bound::Min => anchors.first,
            Bound::Max => anchors.last,
        }
    }
}

/// Returns `true` if a cursor at `cursor_x` has slid past the anchor's
/// center on the side selected by `bound`.
///
/// For `Min` the cursor is out when its right edge is left of the center, or
/// when both its left edge and its own center are. `Max` is the mirror image.
pub fn is_out_of_bound(bound: Bound, cursor_x: Px, cursor_width: Px, anchor: SegmentBounds) -> bool {
    let anchor_center = anchor.center();
    let left = cursor_x;
    let right = cursor_x + cursor_width;
    let center = cursor_x + cursor_width.half();

    match bound {
        Bound::Min => (left < anchor_center && center < anchor_center) || right < anchor_center,
        Bound::Max => (right > anchor_center && center > anchor_center) || left > anchor_center,
    }
}

/// The bound a cursor at `cursor_x` violates, `Min` taking precedence.
pub fn violated_bound(cursor_x: Px, geometry: &GeometrySnapshot) -> Option<Bound> {
    let anchors = geometry.anchors?;
    [Bound::Min, Bound::Max].into_iter().find(|&bound| {
        is_out_of_bound(bound, cursor_x, geometry.cursor_width, bound.anchor(&anchors))
    })
}

/// Next legal cursor x for `candidate_x`: the violated bound's limit, or the
/// candidate itself.
pub fn clamp(candidate_x: Px, geometry: &GeometrySnapshot) -> Px {
    match violated_bound(candidate_x, geometry) {
        Some(Bound::Min) => cursor_min_x(geometry),
        Some(Bound::Max) => cursor_max_x(geometry),
        None => candidate_x,
    }
}

/// Whether a pointer at `pointer_x` is close enough to the cursor range for
/// the cursor to follow it. The zone extends half a cursor past each limit.
pub fn within_follow_zone(pointer_x: Px, geometry: &GeometrySnapshot) -> bool {
    let half_cursor = geometry.cursor_width.half();
    cursor_min_x(geometry) - half_cursor < pointer_x
        && pointer_x < cursor_max_x(geometry) + half_cursor
}
