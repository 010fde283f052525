//! # Density-Independent Pixels (Dp)
//!
//! Visual sizes that should look the same on every screen (the cursor box,
//! the touch slop) are configured in [`Dp`] and converted to physical pixels
//! with the density of the surface the slider lives on.
//!
//! Unlike a process-wide scale factor, the density is passed explicitly to
//! every conversion so two sliders on surfaces with different densities can
//! coexist.
//!
//! ```
//! use scaleview_ui::{Dp, Px};
//!
//! let cursor_width = Dp(8.0);
//! assert_eq!(cursor_width.to_px(2.0), Px(16.0));
//! assert_eq!(Dp::from_pixels_f32(16.0, 2.0), cursor_width);
//! ```

use crate::Px;

/// Density-independent pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f64);

impl Dp {
    /// A constant representing zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp` instance.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts to physical pixels as `f32`.
    pub fn to_pixels_f32(&self, scale_factor: f64) -> f32 {
        (self.0 * scale_factor) as f32
    }

    /// Creates a `Dp` value from physical pixels.
    pub fn from_pixels_f32(value: f32, scale_factor: f64) -> Self {
        Dp(value as f64 / scale_factor)
    }

    /// Converts to [`Px`].
    pub fn to_px(&self, scale_factor: f64) -> Px {
        Px::from_dp(*self, scale_factor)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_pixels() {
        let dp = Dp(32.0);
        let px = dp.to_pixels_f32(3.0);
        assert_eq!(px, 96.0);
        assert_eq!(Dp::from_pixels_f32(px, 3.0), dp);
    }

    #[test]
    fn unit_scale_is_identity() {
        assert_eq!(Dp(8.0).to_px(1.0), Px(8.0));
    }
}
