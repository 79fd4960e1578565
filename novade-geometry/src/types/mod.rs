//! Geometry value types.
//!
//! - [`Point2D`]: an `(x, y)` pair.
//! - [`Size2D`]: a `(width, height)` pair, possibly negative.
//! - [`Rect`]: an origin plus a size, with the full rectangle operation set.
//!
//! All three are generic over a floating point [`Scalar`]. The `f32` aliases
//! [`Point`], [`Size`] and [`Rectangle`] are the primary API, matching the
//! single-precision coordinates used by the NovaDE rendering pipeline.

pub mod point;
pub mod rect;
pub mod size;

use num_traits::Float;
use std::fmt;

pub use point::Point2D;
pub use rect::{rect_equal, zero_rect, Rect};
pub use size::Size2D;

/// Floating point scalar usable as a coordinate.
///
/// Implemented for `f32` and `f64`. The `Debug`/`Display` bounds let geometry
/// values appear in log events.
pub trait Scalar: Float + fmt::Debug + fmt::Display + Default + Send + Sync + 'static {}

impl<T> Scalar for T where T: Float + fmt::Debug + fmt::Display + Default + Send + Sync + 'static {}

/// A 2D point with `f32` coordinates. Alias for [`Point2D<f32>`].
pub type Point = Point2D<f32>;
/// A 2D size with `f32` dimensions. Alias for [`Size2D<f32>`].
pub type Size = Size2D<f32>;
/// A 2D rectangle with `f32` coordinates and dimensions. Alias for [`Rect<f32>`].
pub type Rectangle = Rect<f32>;
