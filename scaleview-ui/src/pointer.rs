//! Single-pointer input events and a bounded event queue.
//!
//! Platform glue translates its native touch or mouse callbacks into
//! [`PointerEvent`]s, either by calling components directly or by buffering
//! them in a [`PointerState`] that is drained once per frame.
//!
//! Only the horizontal coordinate is carried: the components in this
//! workspace are one-dimensional.
//!
//! # Usage
//!
//! ```
//! use scaleview_ui::{Px, pointer::{PointerEventContent, PointerState}};
//!
//! let mut pointer = PointerState::default();
//! pointer.handle_pointer_down(Px(40.0));
//! pointer.handle_pointer_move(Px(120.0));
//! pointer.handle_pointer_up(Px(121.0));
//!
//! let events = pointer.take_events();
//! assert_eq!(events.len(), 3);
//! assert!(matches!(events[0].content, PointerEventContent::Pressed(_)));
//! ```

use std::{collections::VecDeque, time::Instant};

use tracing::trace;

use crate::Px;

/// Maximum number of events to keep in the queue while nobody drains it.
///
/// Move events are discarded first. Only a queue holding nothing but presses,
/// releases and cancels loses its oldest event.
const KEEP_EVENTS_COUNT: usize = 10;

/// A pointer event with the instant it was observed.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    /// Timestamp indicating when this event occurred.
    pub timestamp: Instant,
    /// What happened.
    pub content: PointerEventContent,
}

impl PointerEvent {
    /// Creates an event stamped with the current instant.
    pub fn now(content: PointerEventContent) -> Self {
        Self {
            timestamp: Instant::now(),
            content,
        }
    }
}

/// The kind of pointer event and its horizontal position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEventContent {
    /// The pointer touched down at `x`.
    Pressed(Px),
    /// The pointer moved to `x` while down.
    Moved(Px),
    /// The pointer was lifted at `x`.
    Released(Px),
    /// The platform took the gesture away (e.g. a parent started scrolling).
    Cancelled,
}

impl PointerEventContent {
    /// The horizontal position carried by the event, if any.
    pub fn x(&self) -> Option<Px> {
        match self {
            Self::Pressed(x) | Self::Moved(x) | Self::Released(x) => Some(*x),
            Self::Cancelled => None,
        }
    }
}

/// Buffers pointer events between platform callbacks and component input
/// handling.
///
/// `PointerState` is not thread-safe and should live on the thread that
/// receives platform input.
#[derive(Debug, Default)]
pub struct PointerState {
    /// Last known pointer x while the pointer is down.
    position: Option<Px>,
    /// Bounded queue of events awaiting processing.
    events: VecDeque<PointerEvent>,
}

impl PointerState {
    /// Adds an event to the processing queue.
    ///
    /// The queue never holds more than [`KEEP_EVENTS_COUNT`] events. Over the
    /// limit the oldest pending move is dropped, since later moves supersede
    /// it. Without a pending move the oldest event is dropped instead.
    pub fn push_event(&mut self, event: PointerEvent) {
        self.events.push_back(event);
        if self.events.len() <= KEEP_EVENTS_COUNT {
            return;
        }

        match self
            .events
            .iter()
            .position(|e| matches!(e.content, PointerEventContent::Moved(_)))
        {
            Some(index) => {
                trace!("Dropping stale pointer move at queue index {index}");
                self.events.remove(index);
            }
            None => {
                if let Some(dropped) = self.events.pop_front() {
                    trace!("Pointer queue full; dropping {:?}", dropped.content);
                }
            }
        }
    }

    /// Records a touch-down.
    pub fn handle_pointer_down(&mut self, x: Px) {
        self.position = Some(x);
        self.push_event(PointerEvent::now(PointerEventContent::Pressed(x)));
    }

    /// Records a move. Moves without a preceding down are still queued; the
    /// consumer decides whether they mean anything.
    pub fn handle_pointer_move(&mut self, x: Px) {
        self.position = Some(x);
        self.push_event(PointerEvent::now(PointerEventContent::Moved(x)));
    }

    /// Records a release and forgets the pointer position.
    pub fn handle_pointer_up(&mut self, x: Px) {
        self.position = None;
        self.push_event(PointerEvent::now(PointerEventContent::Released(x)));
    }

    /// Records a cancellation and forgets the pointer position.
    pub fn handle_pointer_cancel(&mut self) {
        self.position = None;
        self.push_event(PointerEvent::now(PointerEventContent::Cancelled));
    }

    /// Drains all pending events, oldest first.
    pub fn take_events(&mut self) -> Vec<PointerEvent> {
        self.events.drain(..).collect()
    }

    /// Clears pending events and the tracked position.
    pub fn clear(&mut self) {
        self.events.clear();
        self.position = None;
    }

    /// Returns the current pointer x, if the pointer is down.
    pub fn position(&self) -> Option<Px> {
        self.position
    }

    /// Number of events waiting to be drained.
    pub fn pending(&self) -> usize {
        self.events.len()
    }
}
