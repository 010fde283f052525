//! Components built on `scaleview-ui`.
//!
//! # Usage
//!
//! The [`slider`] module provides [`slider::ScaleSlider`], a horizontal scale
//! split into tick segments with a cursor that can be dragged between the
//! first and the last segment center. The host does the layout and drawing;
//! the slider owns the drag logic and tells the host where the cursor goes
//! and which value to show.
//!
//! ```
//! use scaleview_components::slider::{ScaleSlider, ScaleSliderArgs};
//! use scaleview_ui::Px;
//!
//! let mut slider = ScaleSlider::new(ScaleSliderArgs::default().progress_max(100))
//!     .expect("valid args");
//! let geometry = slider.evenly_spaced_geometry(Px(330.0));
//! slider.on_layout_changed(geometry);
//! assert_eq!(slider.progress(), Some(0));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod slider;
