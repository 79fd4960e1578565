//! The [`Point2D`] leaf value type.

use super::Scalar;
use std::fmt;
use std::ops::{Add, Sub};

use crate::utils::approx_eq;

/// A point in 2D space.
///
/// Equality (`==`) is component-wise within the crate-wide tolerance, see
/// [`crate::utils::approx`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Point2D<T: Scalar> {
    /// The x-coordinate of the point.
    pub x: T,
    /// The y-coordinate of the point.
    pub y: T,
}

impl<T: Scalar> Point2D<T> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Point2D { x, y }
    }

    /// The point at (0, 0).
    pub fn zero() -> Self {
        Point2D::new(T::zero(), T::zero())
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> T {
        let (dx, dy) = self.distance_components(other);
        dx.hypot(dy)
    }

    /// Absolute distance to `other` along each axis, as `(dx, dy)`.
    pub fn distance_components(&self, other: &Self) -> (T, T) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }

    /// Checks whether `other` lies within `epsilon` of this point on both axes.
    ///
    /// Unlike `==`, the radius here is chosen by the caller.
    pub fn near(&self, other: &Self, epsilon: T) -> bool {
        let (dx, dy) = self.distance_components(other);
        dx <= epsilon && dy <= epsilon
    }

    /// Linearly interpolates towards `other`. `t` is not clamped.
    pub fn interpolate(&self, other: &Self, t: T) -> Self {
        Point2D::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Returns `true` if neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Point2D<f32> {
    /// The origin for `f32` points.
    pub const ZERO: Self = Point2D::new(0.0, 0.0);
}

impl Point2D<f64> {
    /// The origin for `f64` points.
    pub const ZERO: Self = Point2D::new(0.0, 0.0);
}

impl<T: Scalar> PartialEq for Point2D<T> {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl<T: Scalar> Add for Point2D<T> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Scalar> Sub for Point2D<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Scalar> fmt::Display for Point2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_new_and_coordinates() {
        let p = Point2D::new(10.5f32, 20.5);
        assert_eq!(p.x, 10.5);
        assert_eq!(p.y, 20.5);
        assert_eq!(Point2D::<f32>::zero(), Point2D::<f32>::ZERO);
        assert_eq!(Point2D::<f64>::default(), Point2D::<f64>::ZERO);
    }

    #[test]
    fn point_equality_absorbs_round_off() {
        let a = Point2D::new(0.1f32 + 0.2, 1.0);
        let b = Point2D::new(0.3f32, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, Point2D::new(0.31, 1.0));
        assert_ne!(Point2D::new(f32::NAN, 0.0), Point2D::new(f32::NAN, 0.0));
    }

    #[test]
    fn point_distance() {
        let p1 = Point2D::new(1.0f64, 2.0);
        let p2 = Point2D::new(4.0, 6.0);
        assert_eq!(p1.distance(&p2), 5.0);
        assert_eq!(p1.distance_components(&p2), (3.0, 4.0));
        assert_eq!(p2.distance_components(&p1), (3.0, 4.0));
    }

    #[test]
    fn point_near_uses_caller_epsilon() {
        let p1 = Point2D::new(0.0f32, 0.0);
        let p2 = Point2D::new(0.05, -0.05);
        assert!(p1.near(&p2, 0.1));
        assert!(!p1.near(&p2, 0.01));
    }

    #[test]
    fn point_interpolate() {
        let a = Point2D::new(0.0f32, 10.0);
        let b = Point2D::new(10.0, 20.0);
        assert_eq!(a.interpolate(&b, 0.0), a);
        assert_eq!(a.interpolate(&b, 1.0), b);
        assert_eq!(a.interpolate(&b, 0.5), Point2D::new(5.0, 15.0));
        assert_eq!(a.interpolate(&b, 2.0), Point2D::new(20.0, 30.0));
    }

    #[test]
    fn point_ops() {
        let p1 = Point2D::new(1.0f32, 2.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert_eq!(p1 + p2, Point2D::new(4.0, 6.0));
        assert_eq!(p2 - p1, Point2D::new(2.0, 2.0));
    }

    #[test]
    fn point_display() {
        assert_eq!(Point2D::new(1.5f32, -2.0).to_string(), "(1.5, -2)");
    }
}
