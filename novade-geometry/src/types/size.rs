//! The [`Size2D`] leaf value type.

use super::Scalar;
use std::fmt;

use crate::utils::approx_eq;

/// A width and height pair.
///
/// Components may be negative; a rectangle with a negative size extends left of
/// and/or above its origin. Nothing is enforced at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Size2D<T: Scalar> {
    /// The width component of the size.
    pub width: T,
    /// The height component of the size.
    pub height: T,
}

impl<T: Scalar> Size2D<T> {
    /// Creates a new size with the given width and height.
    pub const fn new(width: T, height: T) -> Self {
        Size2D { width, height }
    }

    /// A size of (0, 0).
    pub fn zero() -> Self {
        Size2D::new(T::zero(), T::zero())
    }

    /// Multiplies both dimensions by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        Size2D::new(self.width * factor, self.height * factor)
    }

    /// Linearly interpolates towards `other`. `t` is not clamped.
    pub fn interpolate(&self, other: &Self, t: T) -> Self {
        Size2D::new(
            self.width + (other.width - self.width) * t,
            self.height + (other.height - self.height) * t,
        )
    }

    /// `width * height`. Negative when exactly one dimension is negative.
    pub fn area(&self) -> T {
        self.width * self.height
    }

    /// Checks if the area is zero (width or height is zero).
    pub fn is_empty(&self) -> bool {
        self.width.is_zero() || self.height.is_zero()
    }

    /// Checks that width and height are both non-negative.
    pub fn is_valid(&self) -> bool {
        self.width >= T::zero() && self.height >= T::zero()
    }

    /// Returns `true` if neither dimension is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

impl Size2D<f32> {
    /// A size of (0.0, 0.0) for f32.
    pub const ZERO: Self = Size2D::new(0.0, 0.0);
}

impl Size2D<f64> {
    /// A size of (0.0, 0.0) for f64.
    pub const ZERO: Self = Size2D::new(0.0, 0.0);
}

impl<T: Scalar> PartialEq for Size2D<T> {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.width, other.width) && approx_eq(self.height, other.height)
    }
}

impl<T: Scalar> fmt::Display for Size2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
