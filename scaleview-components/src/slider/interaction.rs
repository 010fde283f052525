use scaleview_ui::Px;
use tracing::{debug, trace};

use super::{
    clamp::{clamp, violated_bound, within_follow_zone},
    layout::GeometrySnapshot,
};

/// Pointer bookkeeping for one gesture, from touch-down to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer x at touch-down. Slop is always measured from here.
    pub origin_x: Px,
    /// Last pointer x that passed the slop check.
    pub last_pointer_x: Px,
}

/// Whether a gesture is in progress.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer went down on the slider and has not been lifted yet.
    Dragging(DragSession),
}

impl DragState {
    /// Returns `true` while a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }
}

/// `Idle -> Dragging`. A second down without a release restarts the session.
pub(super) fn start_drag(drag: &mut DragState, x: Px) {
    if let DragState::Dragging(previous) = drag {
        debug!(
            "Pointer down while dragging from {}; restarting gesture",
            previous.origin_x
        );
    }
    *drag = DragState::Dragging(DragSession {
        origin_x: x,
        last_pointer_x: x,
    });
}

/// Handles a move. Returns the cursor x to commit, or `None` when the move
/// is ignored (no gesture, or still within slop of the touch-down point).
pub(super) fn drag_to(
    drag: &mut DragState,
    x: Px,
    cursor_x: Px,
    geometry: &GeometrySnapshot,
    touch_slop: Px,
) -> Option<Px> {
    let DragState::Dragging(session) = drag else {
        trace!("Ignoring pointer move at {x} without a gesture");
        return None;
    };

    if x.distance_to(session.origin_x) < touch_slop {
        trace!("Pointer move at {x} within slop of {}", session.origin_x);
        return None;
    }
    session.last_pointer_x = x;

    let tentative = if within_follow_zone(x, geometry) {
        x
    } else {
        cursor_x
    };
    Some(clamp(tentative, geometry))
}

/// `Dragging -> Idle` on release. The release x itself is clamped and
/// becomes the cursor position. Returns `None` if no gesture was active.
pub(super) fn release(
    drag: &mut DragState,
    x: Px,
    cursor_x: Px,
    geometry: &GeometrySnapshot,
) -> Option<Px> {
    if !drag.is_dragging() {
        trace!("Ignoring pointer up at {x} without a gesture");
        return None;
    }
    *drag = DragState::Idle;

    let probe = if x.is_finite() { x } else { cursor_x };
    Some(clamp(probe, geometry))
}

/// `Dragging -> Idle` without touching the cursor. Returns `true` if a
/// gesture was discarded.
pub(super) fn cancel(drag: &mut DragState) -> bool {
    let was_dragging = drag.is_dragging();
    *drag = DragState::Idle;
    was_dragging
}

/// Re-applies the bounds to a resting cursor after the geometry changed.
pub(super) fn settle_after_layout(cursor_x: Px, geometry: &GeometrySnapshot) -> Px {
    match violated_bound(cursor_x, geometry) {
        Some(bound) => {
            let settled = clamp(cursor_x, geometry);
            debug!(
                "Cursor at {cursor_x} out of {bound:?} bound after layout; snapping to {settled}"
            );
            settled
        }
        None => cursor_x,
    }
}
