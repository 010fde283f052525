use scaleview_ui::{Px, PxSpan};

use super::Scale;

/// Horizontal bounds of one tick segment, in container coordinates.
pub type SegmentBounds = PxSpan;

/// The two segments the cursor range is anchored to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentAnchors {
    /// Leftmost segment; its center is where the cursor bottoms out.
    pub first: SegmentBounds,
    /// Rightmost segment; its center is where the cursor tops out.
    pub last: SegmentBounds,
}

/// Geometry reported by the layout collaborator after each layout pass.
///
/// A snapshot without anchors means "not laid out yet": bounds collapse to
/// zero and no progress can be derived.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometrySnapshot {
    /// Width of the whole scale container.
    pub container_width: Px,
    /// Width of the cursor box.
    pub cursor_width: Px,
    /// First and last segment bounds, if any segments exist.
    pub anchors: Option<SegmentAnchors>,
}

impl GeometrySnapshot {
    /// A snapshot with no segments and zero sizes.
    pub const EMPTY: Self = Self {
        container_width: Px::ZERO,
        cursor_width: Px::ZERO,
        anchors: None,
    };

    /// Creates a snapshot from explicit parts.
    pub fn new(container_width: Px, cursor_width: Px, anchors: Option<SegmentAnchors>) -> Self {
        Self {
            container_width,
            cursor_width,
            anchors,
        }
    }

    /// Builds a snapshot from a laid-out row of segments. Only the first and
    /// last entries matter; an empty row yields a snapshot without anchors.
    pub fn from_segments(
        container_width: Px,
        cursor_width: Px,
        segments: &[SegmentBounds],
    ) -> Self {
        let anchors = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => Some(SegmentAnchors {
                first: *first,
                last: *last,
            }),
            _ => None,
        };
        Self::new(container_width, cursor_width, anchors)
    }

    /// Snapshot for `segment_count` equally weighted segments filling
    /// `container_width`.
    pub fn evenly_spaced(container_width: Px, cursor_width: Px, segment_count: usize) -> Self {
        Self::from_segments(
            container_width,
            cursor_width,
            &segment_row(container_width, segment_count),
        )
    }

    /// Returns `true` once segment bounds are known.
    pub fn has_segments(&self) -> bool {
        self.anchors.is_some()
    }
}

/// Lays out `segment_count` equal-weight segments across the container.
pub fn segment_row(container_width: Px, segment_count: usize) -> Vec<SegmentBounds> {
    if segment_count == 0 || container_width.0 <= 0.0 {
        return Vec::new();
    }
    let width = container_width / segment_count as f32;
    (0..segment_count)
        .map(|i| SegmentBounds::new(width * i as f32, width))
        .collect()
}

/// A tick drawn at the center of one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickMark {
    /// Segment index, left to right.
    pub index: usize,
    /// Major ticks are drawn thicker and carry a label.
    pub major: bool,
    /// Scale value shown under a major tick.
    pub label: Option<i32>,
}

/// Describes the ticks of a scale: major at both ends and in the middle,
/// minor everywhere else.
pub fn tick_marks(scale: &Scale) -> Vec<TickMark> {
    let count = scale.segment_count();
    let last = count.saturating_sub(1);
    let middle = count / 2;
    (0..count)
        .map(|index| {
            let major = index == 0 || index == middle || index == last;
            TickMark {
                index,
                major,
                label: major.then(|| scale.value_at_segment(index)),
            }
        })
        .collect()
}
