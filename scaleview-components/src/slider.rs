//! A scale slider whose cursor is anchored to the first and last tick
//! segments.
//!
//! ## Usage
//!
//! Feed layout results through [`ScaleSlider::on_layout_changed`] and pointer
//! input through the `on_pointer_*` methods (or
//! [`ScaleSlider::handle_pointer_event`]). The slider reports where its cursor
//! should be drawn and which value the label should show through the
//! callbacks registered at construction.
//!
//! ```
//! use scaleview_components::slider::{GeometrySnapshot, ScaleSlider, ScaleSliderArgs};
//! use scaleview_ui::Px;
//!
//! let mut slider = ScaleSlider::new(ScaleSliderArgs::default())
//!     .expect("default args are valid")
//!     .on_progress_changed(|value| println!("progress: {value:?}"));
//!
//! slider.on_layout_changed(GeometrySnapshot::evenly_spaced(Px(330.0), Px(8.0), 11));
//! assert_eq!(slider.cursor_x(), Px(11.0));
//!
//! slider.on_pointer_down(Px(20.0));
//! slider.on_pointer_move(Px(161.0));
//! slider.on_pointer_up(Px(161.0));
//! assert_eq!(slider.progress(), Some(10));
//! ```
use derive_setters::Setters;
use scaleview_ui::{CallbackWith, Dp, PointerEvent, PointerEventContent, PointerState, Px};
use thiserror::Error;
use tracing::debug;

use interaction::{cancel, drag_to, release, settle_after_layout, start_drag};

pub use bounds::{cursor_max_x, cursor_min_x};
pub use clamp::{Bound, clamp, is_out_of_bound, violated_bound, within_follow_zone};
pub use interaction::{DragSession, DragState};
pub use layout::{
    GeometrySnapshot, SegmentAnchors, SegmentBounds, TickMark, segment_row, tick_marks,
};
pub use progress::progress_for;

mod bounds;
mod clamp;
mod interaction;
mod layout;
mod progress;

const DEFAULT_SEGMENT_COUNT: usize = 11;
const DEFAULT_PROGRESS_MIN: i32 = 0;
const DEFAULT_PROGRESS_MAX: i32 = 20;
const DEFAULT_TOUCH_SLOP: Dp = Dp(8.0);
const DEFAULT_CURSOR_WIDTH: Dp = Dp(8.0);
const DEFAULT_CURSOR_HEIGHT: Dp = Dp(32.0);

/// Rejected slider configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleSliderError {
    /// A scale needs a first and a last segment to anchor to.
    #[error("a scale needs at least 2 segments, got {0}")]
    TooFewSegments(usize),
    /// `progress_max` must be strictly greater than `progress_min`.
    #[error("progress range is empty: min {min} is not below max {max}")]
    EmptyProgressRange {
        /// Configured minimum.
        min: i32,
        /// Configured maximum.
        max: i32,
    },
    /// The density must be a finite positive number.
    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScaleFactor(f64),
    /// A size in dp was negative or not finite.
    #[error("{name} must be finite and non-negative, got {value}dp")]
    InvalidDimension {
        /// Which argument was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Arguments for [`ScaleSlider`].
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScaleSliderArgs {
    /// Number of tick segments. The cursor travels between the centers of the
    /// first and the last one.
    pub segment_count: usize,
    /// Value reported with the cursor over the first segment.
    pub progress_min: i32,
    /// Upper end of the reported range.
    pub progress_max: i32,
    /// Pointer travel from touch-down below which moves are ignored.
    #[setters(into)]
    pub touch_slop: Dp,
    /// Width of the cursor box.
    #[setters(into)]
    pub cursor_width: Dp,
    /// Height of the cursor box. Only reported back to the host.
    #[setters(into)]
    pub cursor_height: Dp,
    /// Physical pixels per dp on the hosting surface.
    pub scale_factor: f64,
}

impl Default for ScaleSliderArgs {
    fn default() -> Self {
        Self {
            segment_count: DEFAULT_SEGMENT_COUNT,
            progress_min: DEFAULT_PROGRESS_MIN,
            progress_max: DEFAULT_PROGRESS_MAX,
            touch_slop: DEFAULT_TOUCH_SLOP,
            cursor_width: DEFAULT_CURSOR_WIDTH,
            cursor_height: DEFAULT_CURSOR_HEIGHT,
            scale_factor: 1.0,
        }
    }
}

/// When a committed cursor position reports the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emit {
    /// Pointer input: every committed move or release.
    Always,
    /// Layout: only if the cursor moved or the value changed.
    OnChange,
}

/// Validated segment count and value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    segment_count: usize,
    progress_min: i32,
    progress_max: i32,
}

impl Scale {
    /// Validates a scale.
    pub fn new(
        segment_count: usize,
        progress_min: i32,
        progress_max: i32,
    ) -> Result<Self, ScaleSliderError> {
        if segment_count < 2 {
            return Err(ScaleSliderError::TooFewSegments(segment_count));
        }
        if progress_max <= progress_min {
            return Err(ScaleSliderError::EmptyProgressRange {
                min: progress_min,
                max: progress_max,
            });
        }
        Ok(Self {
            segment_count,
            progress_min,
            progress_max,
        })
    }

    /// Number of tick segments.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Lower end of the value range.
    pub fn progress_min(&self) -> i32 {
        self.progress_min
    }

    /// Upper end of the value range.
    pub fn progress_max(&self) -> i32 {
        self.progress_max
    }

    /// Scale value at the center of segment `index`, linearly spread so the
    /// first segment shows `progress_min` and the last `progress_max`.
    pub fn value_at_segment(&self, index: usize) -> i32 {
        let last = (self.segment_count - 1) as i64;
        let index = (index as i64).min(last);
        let range = i64::from(self.progress_max) - i64::from(self.progress_min);
        (i64::from(self.progress_min) + range * index / last) as i32
    }
}

/// The drag engine of a scale slider.
///
/// Owns the cursor position and the gesture state. Geometry is supplied by
/// the host's layout pass and replaced wholesale on every change.
#[derive(Debug)]
pub struct ScaleSlider {
    scale: Scale,
    touch_slop: Px,
    cursor_width: Px,
    cursor_height: Px,
    geometry: GeometrySnapshot,
    cursor_x: Px,
    drag: DragState,
    reported_progress: Option<i32>,
    on_cursor_position_changed: CallbackWith<Px>,
    on_progress_changed: CallbackWith<Option<i32>>,
}

impl ScaleSlider {
    /// Creates a slider, rejecting malformed arguments.
    pub fn new(args: ScaleSliderArgs) -> Result<Self, ScaleSliderError> {
        let scale = Scale::new(args.segment_count, args.progress_min, args.progress_max)?;
        if !args.scale_factor.is_finite() || args.scale_factor <= 0.0 {
            return Err(ScaleSliderError::InvalidScaleFactor(args.scale_factor));
        }
        for (name, value) in [
            ("touch_slop", args.touch_slop),
            ("cursor_width", args.cursor_width),
            ("cursor_height", args.cursor_height),
        ] {
            if !value.0.is_finite() || value.0 < 0.0 {
                return Err(ScaleSliderError::InvalidDimension {
                    name,
                    value: value.0,
                });
            }
        }

        Ok(Self {
            scale,
            touch_slop: args.touch_slop.to_px(args.scale_factor),
            cursor_width: args.cursor_width.to_px(args.scale_factor),
            cursor_height: args.cursor_height.to_px(args.scale_factor),
            geometry: GeometrySnapshot::EMPTY,
            cursor_x: Px::ZERO,
            drag: DragState::Idle,
            reported_progress: None,
            on_cursor_position_changed: CallbackWith::default(),
            on_progress_changed: CallbackWith::default(),
        })
    }

    /// Sets the handler told where to draw the cursor's left edge.
    pub fn on_cursor_position_changed<F>(mut self, handler: F) -> Self
    where
        F: Fn(Px) + Send + Sync + 'static,
    {
        self.on_cursor_position_changed = CallbackWith::new(handler);
        self
    }

    /// Sets the handler told which value the label should show. `None` means
    /// the value is unknown and the label should be left alone.
    pub fn on_progress_changed<F>(mut self, handler: F) -> Self
    where
        F: Fn(Option<i32>) + Send + Sync + 'static,
    {
        self.on_progress_changed = CallbackWith::new(handler);
        self
    }

    /// Sets the progress handler using a shared callback.
    pub fn on_progress_changed_shared(
        mut self,
        handler: impl Into<CallbackWith<Option<i32>>>,
    ) -> Self {
        self.on_progress_changed = handler.into();
        self
    }

    /// The validated scale.
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Current cursor left edge.
    pub fn cursor_x(&self) -> Px {
        self.cursor_x
    }

    /// Cursor box size in physical pixels, for the layout collaborator.
    pub fn cursor_size(&self) -> (Px, Px) {
        (self.cursor_width, self.cursor_height)
    }

    /// Touch slop in physical pixels.
    pub fn touch_slop(&self) -> Px {
        self.touch_slop
    }

    /// The geometry currently in effect.
    pub fn geometry(&self) -> &GeometrySnapshot {
        &self.geometry
    }

    /// Gesture state.
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Returns whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Smallest cursor x for the current geometry.
    pub fn min_x(&self) -> Px {
        cursor_min_x(&self.geometry)
    }

    /// Largest cursor x for the current geometry.
    pub fn max_x(&self) -> Px {
        cursor_max_x(&self.geometry)
    }

    /// Value for the current cursor position, recomputed from the latest
    /// geometry.
    pub fn progress(&self) -> Option<i32> {
        progress_for(self.cursor_x, &self.geometry, &self.scale)
    }

    /// Left edge for a label of `label_width` centred over the cursor.
    pub fn label_x(&self, label_width: Px) -> Px {
        self.cursor_x + self.geometry.cursor_width.half() - label_width.half()
    }

    /// Geometry for an evenly spaced row of this slider's segments in a
    /// container of `container_width`, using the configured cursor width.
    pub fn evenly_spaced_geometry(&self, container_width: Px) -> GeometrySnapshot {
        GeometrySnapshot::evenly_spaced(
            container_width,
            self.cursor_width,
            self.scale.segment_count,
        )
    }

    /// Tick marks for this slider's scale.
    pub fn tick_marks(&self) -> Vec<TickMark> {
        tick_marks(&self.scale)
    }

    /// Replaces the geometry and snaps a cursor left outside the new bounds.
    /// Reports only if the cursor moved or the value changed.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_layout_changed(&mut self, geometry: GeometrySnapshot) {
        self.geometry = geometry;
        let settled = settle_after_layout(self.cursor_x, &self.geometry);
        self.commit(settled, Emit::OnChange);
    }

    /// Starts a gesture. The cursor does not move until the pointer travels
    /// past the touch slop.
    pub fn on_pointer_down(&mut self, x: Px) {
        debug!("Drag started at {x}");
        start_drag(&mut self.drag, x);
    }

    /// Drags the cursor. Ignored without a gesture or within the slop.
    /// A move past the slop always reports the value, even if the cursor is
    /// held at a bound or the pointer left the follow zone.
    pub fn on_pointer_move(&mut self, x: Px) {
        if let Some(next) = drag_to(
            &mut self.drag,
            x,
            self.cursor_x,
            &self.geometry,
            self.touch_slop,
        ) {
            self.commit(next, Emit::Always);
        }
    }

    /// Ends the gesture, moving the cursor to the clamped release position.
    pub fn on_pointer_up(&mut self, x: Px) {
        if let Some(next) = release(&mut self.drag, x, self.cursor_x, &self.geometry) {
            debug!("Drag released at {x}; cursor settles at {next}");
            self.commit(next, Emit::Always);
        }
    }

    /// Abandons the gesture and leaves the cursor where it is.
    pub fn on_pointer_cancel(&mut self) {
        if cancel(&mut self.drag) {
            debug!("Drag cancelled; cursor stays at {}", self.cursor_x);
        }
    }

    /// Dispatches a pointer event. Returns `true` if the slider consumed it,
    /// which is the case for every event of a gesture that started here.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let consumed = match event.content {
            PointerEventContent::Pressed(_) => true,
            _ => self.drag.is_dragging(),
        };
        match event.content {
            PointerEventContent::Pressed(x) => self.on_pointer_down(x),
            PointerEventContent::Moved(x) => self.on_pointer_move(x),
            PointerEventContent::Released(x) => self.on_pointer_up(x),
            PointerEventContent::Cancelled => self.on_pointer_cancel(),
        }
        consumed
    }

    /// Drains `pointer` and handles its events in order. Returns how many
    /// were consumed.
    pub fn handle_pointer_events(&mut self, pointer: &mut PointerState) -> usize {
        pointer
            .take_events()
            .iter()
            .filter(|event| self.handle_pointer_event(event))
            .count()
    }

    fn commit(&mut self, next_x: Px, emit: Emit) {
        let moved = next_x != self.cursor_x;
        if moved {
            self.cursor_x = next_x;
            self.on_cursor_position_changed.call(next_x);
        }

        let progress = self.progress();
        let changed = moved || progress != self.reported_progress;
        if changed || emit == Emit::Always {
            self.reported_progress = progress;
            self.on_progress_changed.call(progress);
        }
    }
}
