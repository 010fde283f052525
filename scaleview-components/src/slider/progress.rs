use scaleview_ui::Px;

use super::{Scale, layout::GeometrySnapshot};

/// Rounding error allowed in the span ratio, in `f32` ulps of the container
/// width. Covers the handful of `f32` operations that produce the anchors and
/// the cursor x, and nothing more.
const SPAN_ULPS: f64 = 8.0;

/// Maps a cursor x to a value on `scale`.
///
/// The travelled span is measured from the center of a segment-wide band at
/// the left edge, against the container width minus one segment. The ratio
/// is floored, so the last segment's center only reaches `progress_max` when
/// the segments fill the container exactly.
///
/// Returns `None` before segments exist or when the container is not wider
/// than a segment.
pub fn progress_for(cursor_x: Px, geometry: &GeometrySnapshot, scale: &Scale) -> Option<i32> {
    let anchors = geometry.anchors?;
    let segment_width = anchors.last.width;
    let total_span = geometry.container_width - segment_width;
    let current_span = cursor_x + geometry.cursor_width.half() - segment_width.half();

    if total_span.0 <= 0.0 {
        return None;
    }

    let container_width = f64::from(geometry.container_width.0);
    let total_span = f64::from(total_span.0);
    let range = f64::from(scale.progress_max()) - f64::from(scale.progress_min());
    let ratio = range * f64::from(current_span.0) / total_span;
    let noise = range * SPAN_ULPS * f64::from(f32::EPSILON) * container_width / total_span;
    Some(scale.progress_min().saturating_add((ratio + noise).floor() as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::{
        bounds::{cursor_max_x, cursor_min_x},
        layout::{SegmentAnchors, SegmentBounds},
    };

    fn default_scale() -> Scale {
        Scale::new(11, 0, 20).expect("valid scale")
    }

    fn inset_geometry() -> GeometrySnapshot {
        GeometrySnapshot::new(
            Px(330.0),
            Px(8.0),
            Some(SegmentAnchors {
                first: SegmentBounds::new(Px(0.0), Px(30.0)),
                last: SegmentBounds::new(Px(296.0), Px(30.0)),
            }),
        )
    }

    #[test]
    fn unset_without_segments() {
        assert_eq!(
            progress_for(Px(10.0), &GeometrySnapshot::EMPTY, &default_scale()),
            None
        );
    }

    #[test]
    fn unset_when_container_not_wider_than_segment() {
        let geometry = GeometrySnapshot::new(
            Px(30.0),
            Px(8.0),
            Some(SegmentAnchors {
                first: SegmentBounds::new(Px(0.0), Px(30.0)),
                last: SegmentBounds::new(Px(0.0), Px(30.0)),
            }),
        );
        assert_eq!(progress_for(Px(11.0), &geometry, &default_scale()), None);
    }

    #[test]
    fn min_maps_to_progress_min() {
        let geometry = inset_geometry();
        let min_x = cursor_min_x(&geometry);
        assert_eq!(min_x, Px(11.0));
        assert_eq!(progress_for(min_x, &geometry, &default_scale()), Some(0));
    }

    #[test]
    fn max_is_floored_below_progress_max() {
        // total span 300, current span 296 at max_x: floor(20 * 296 / 300) = 19.
        let geometry = inset_geometry();
        let max_x = cursor_max_x(&geometry);
        assert_eq!(max_x, Px(307.0));
        assert_eq!(progress_for(max_x, &geometry, &default_scale()), Some(19));
    }

    #[test]
    fn evenly_spaced_max_reaches_progress_max() {
        let geometry = GeometrySnapshot::evenly_spaced(Px(330.0), Px(8.0), 11);
        let scale = default_scale();
        assert_eq!(progress_for(cursor_max_x(&geometry), &geometry, &scale), Some(20));
        // Half way along: span 150 of 300.
        assert_eq!(progress_for(Px(161.0), &geometry, &scale), Some(10));
        // Just short of the next step floors down.
        assert_eq!(progress_for(Px(175.9), &geometry, &scale), Some(10));
        assert_eq!(progress_for(Px(176.0), &geometry, &scale), Some(11));
    }

    #[test]
    fn floors_just_below_a_step() {
        let geometry = GeometrySnapshot::evenly_spaced(Px(330.0), Px(8.0), 11);
        let scale = default_scale();
        // 20 * 299.993 / 300 = 19.9995...
        assert_eq!(progress_for(Px(310.993), &geometry, &scale), Some(19));
        // 20 * 164.99 / 300 = 10.9993...
        assert_eq!(progress_for(Px(175.99), &geometry, &scale), Some(10));
    }

    #[test]
    fn inexact_segment_widths_hit_both_ends() {
        // 1000 / 7 is not representable, so the anchors carry rounding error.
        let geometry = GeometrySnapshot::evenly_spaced(Px(1000.0), Px(7.3), 7);
        let scale = Scale::new(7, 0, 60).expect("valid scale");
        assert_eq!(progress_for(cursor_min_x(&geometry), &geometry, &scale), Some(0));
        assert_eq!(progress_for(cursor_max_x(&geometry), &geometry, &scale), Some(60));
    }

    #[test]
    fn offset_scale_starts_at_progress_min() {
        let geometry = GeometrySnapshot::evenly_spaced(Px(330.0), Px(8.0), 11);
        let scale = Scale::new(11, 10, 30).expect("valid scale");
        assert_eq!(progress_for(cursor_min_x(&geometry), &geometry, &scale), Some(10));
        assert_eq!(progress_for(cursor_max_x(&geometry), &geometry, &scale), Some(30));
    }
}
