//! Cursor travel limits derived from the current geometry.
//!
//! The cursor is centred over the first segment at its minimum and over the
//! last segment at its maximum. Both limits are recomputed from the snapshot
//! on every call.

use scaleview_ui::Px;

use super::layout::{GeometrySnapshot, SegmentBounds};

/// Left edge that centres a cursor of `cursor_width` over `anchor`.
pub(super) fn centered_over(anchor: SegmentBounds, cursor_width: Px) -> Px {
    anchor.center() - cursor_width.half()
}

/// Smallest allowed cursor x, or `0` before segments exist.
pub fn cursor_min_x(geometry: &GeometrySnapshot) -> Px {
    geometry
        .anchors
        .map_or(Px::ZERO, |anchors| centered_over(anchors.first, geometry.cursor_width))
}

/// Largest allowed cursor x, or `0` before segments exist.
pub fn cursor_max_x(geometry: &GeometrySnapshot) -> Px {
    geometry
        .anchors
        .map_or(Px::ZERO, |anchors| centered_over(anchors.last, geometry.cursor_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::layout::SegmentAnchors;

    #[test]
    fn empty_geometry_has_zero_bounds() {
        let geometry = GeometrySnapshot::EMPTY;
        assert_eq!(cursor_min_x(&geometry), Px::ZERO);
        assert_eq!(cursor_max_x(&geometry), Px::ZERO);
    }

    #[test]
    fn centres_cursor_over_anchor_segments() {
        let geometry = GeometrySnapshot::evenly_spaced(Px(330.0), Px(8.0), 11);
        assert_eq!(cursor_min_x(&geometry), Px(11.0));
        assert_eq!(cursor_max_x(&geometry), Px(311.0));
    }

    #[test]
    fn follows_latest_snapshot() {
        let wide = GeometrySnapshot::evenly_spaced(Px(330.0), Px(8.0), 11);
        let narrow = GeometrySnapshot::evenly_spaced(Px(220.0), Px(8.0), 11);
        assert_eq!(cursor_max_x(&wide), Px(311.0));
        assert_eq!(cursor_max_x(&narrow), Px(206.0));
    }

    #[test]
    fn uneven_anchor_widths() {
        let geometry = GeometrySnapshot::new(
            Px(100.0),
            Px(10.0),
            Some(SegmentAnchors {
                first: SegmentBounds::new(Px(4.0), Px(12.0)),
                last: SegmentBounds::new(Px(80.0), Px(20.0)),
            }),
        );
        assert_eq!(cursor_min_x(&geometry), Px(5.0));
        assert_eq!(cursor_max_x(&geometry), Px(85.0));
    }
}
