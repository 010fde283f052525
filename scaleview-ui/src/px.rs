//! Physical pixel coordinates along the horizontal axis.
//!
//! Geometry handed over by layout collaborators arrives in physical pixels.
//! Positions are fractional because pointer input is fractional, so [`Px`]
//! wraps an `f32` rather than an integer.
//!
//! # Key Types
//!
//! - [`Px`] - A single horizontal coordinate or length. Negative values are
//!   allowed (a pointer may be dragged left of the container).
//! - [`PxSpan`] - A horizontal interval described by its left edge and width.
//!
//! # Example
//!
//! ```
//! use scaleview_ui::px::{Px, PxSpan};
//!
//! let span = PxSpan::new(Px(300.0), Px(30.0));
//! assert_eq!(span.center(), Px(315.0));
//! assert_eq!(span.right(), Px(330.0));
//! ```

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::dp::Dp;

/// A physical pixel coordinate value.
///
/// Supports the usual arithmetic so geometry formulas read the same way they
/// are written on paper. Comparisons follow `f32` semantics.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub f32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Px` from an `f32` value.
    pub const fn new(value: f32) -> Self {
        Px(value)
    }

    /// Returns the raw `f32` value.
    pub const fn raw(self) -> f32 {
        self.0
    }

    /// Converts density-independent pixels to physical pixels using the given
    /// scale factor.
    ///
    /// ```
    /// use scaleview_ui::{Dp, Px};
    ///
    /// assert_eq!(Px::from_dp(Dp(8.0), 2.0), Px(16.0));
    /// ```
    pub fn from_dp(dp: Dp, scale_factor: f64) -> Self {
        Px((dp.0 * scale_factor) as f32)
    }

    /// Converts this value to density-independent pixels.
    pub fn to_dp(self, scale_factor: f64) -> Dp {
        Dp::from_pixels_f32(self.0, scale_factor)
    }

    /// Half of this length. Used for centring a box over an anchor.
    pub fn half(self) -> Self {
        Px(self.0 / 2.0)
    }

    /// Absolute distance between two coordinates.
    pub fn distance_to(self, other: Self) -> Self {
        Px((self.0 - other.0).abs())
    }

    /// Returns `true` if the value is finite (not NaN or infinite).
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Returns the smaller of two values.
    pub fn min(self, other: Self) -> Self {
        Px(self.0.min(other.0))
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Self) -> Self {
        Px(self.0.max(other.0))
    }
}

impl std::fmt::Display for Px {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Px(value)
    }
}

impl From<Px> for f32 {
    fn from(value: Px) -> Self {
        value.0
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// A horizontal interval: left edge plus width.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxSpan {
    /// Left edge.
    pub x: Px,
    /// Width of the interval.
    pub width: Px,
}

impl PxSpan {
    /// Creates a span from its left edge and width.
    pub const fn new(x: Px, width: Px) -> Self {
        Self { x, width }
    }

    /// Right edge of the span.
    pub fn right(&self) -> Px {
        self.x + self.width
    }

    /// Horizontal midpoint of the span.
    pub fn center(&self) -> Px {
        self.x + self.width.half()
    }

    /// Returns `true` if `x` lies inside the half-open span `[x, right)`.
    pub fn contains(&self, x: Px) -> bool {
        x >= self.x && x < self.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10.0);
        let b = Px(4.0);

        assert_eq!(a + b, Px(14.0));
        assert_eq!(a - b, Px(6.0));
        assert_eq!(a * 2.0, Px(20.0));
        assert_eq!(a / 4.0, Px(2.5));
        assert_eq!(-a, Px(-10.0));
        assert_eq!(a.half(), Px(5.0));
    }

    #[test]
    fn test_px_assign_ops() {
        let mut px = Px(1.0);
        px += Px(2.5);
        assert_eq!(px, Px(3.5));
        px -= Px(0.5);
        assert_eq!(px, Px(3.0));
    }

    #[test]
    fn test_px_dp_conversion() {
        assert_eq!(Px::from_dp(Dp(8.0), 1.0), Px(8.0));
        assert_eq!(Px::from_dp(Dp(8.0), 2.75), Px(22.0));
        assert_eq!(Px(22.0).to_dp(2.75), Dp(8.0));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Px(3.0).distance_to(Px(10.0)), Px(7.0));
        assert_eq!(Px(10.0).distance_to(Px(3.0)), Px(7.0));
    }

    #[test]
    fn test_span_edges() {
        let span = PxSpan::new(Px(0.0), Px(30.0));
        assert_eq!(span.center(), Px(15.0));
        assert_eq!(span.right(), Px(30.0));
        assert!(span.contains(Px(0.0)));
        assert!(span.contains(Px(29.9)));
        assert!(!span.contains(Px(30.0)));
    }
}
