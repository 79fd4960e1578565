//! The [`Rect`] value type and its operation set.
//!
//! A rectangle is an origin plus a size. The size may be negative, in which case
//! the origin is not the top-left corner. Every predicate and set operation here
//! works on the four derived bounds
//!
//! ```text
//! left   = min(x, x + width)    right  = max(x, x + width)
//! top    = min(y, y + height)   bottom = max(y, y + height)
//! ```
//!
//! so callers never have to normalize first, and inputs are never modified.
//! The y axis points down: "top" is the smaller y.
//!
//! Operations come in two shapes. The plain form (`offset`, `inset`, ...) returns
//! a new rectangle. The `_in_place` form rewrites caller-owned storage and
//! returns it for chaining.
//!
//! Non-finite values are not rejected. NaN propagates through arithmetic and
//! makes every comparison false; use [`Rect::check_finite`] to validate input
//! upstream when that matters.

use std::fmt;

use tracing::{debug, trace};

use super::{Point2D, Scalar, Size2D};
use crate::error::GeometryError;
use crate::utils::approx_le;

/// An axis-aligned rectangle.
///
/// `==` compares the normalized forms of both sides within the crate-wide
/// tolerance, so `(10, 10, -10, -10) == (0, 0, 10, 10)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rect<T: Scalar> {
    /// The origin. The top-left corner only when the size is non-negative.
    pub origin: Point2D<T>,
    /// The size. Either component may be negative.
    pub size: Size2D<T>,
}

static ZERO_RECT: Rect<f32> = Rect::<f32>::ZERO;

/// The shared degenerate rectangle `(0, 0, 0, 0)`.
pub fn zero_rect() -> &'static Rect<f32> {
    &ZERO_RECT
}

/// Compares two optional rectangles.
///
/// An absent rectangle never equals anything, including another absent one.
/// Present rectangles are compared with `==`.
pub fn rect_equal<T: Scalar>(a: Option<&Rect<T>>, b: Option<&Rect<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl Rect<f32> {
    /// The degenerate rectangle for `f32`.
    pub const ZERO: Self = Rect::new(0.0, 0.0, 0.0, 0.0);
}

impl Rect<f64> {
    /// The degenerate rectangle for `f64`.
    pub const ZERO: Self = Rect::new(0.0, 0.0, 0.0, 0.0);
}

impl<T: Scalar> Rect<T> {
    /// Creates a rectangle from raw values. The size is kept as given, even if negative.
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            origin: Point2D::new(x, y),
            size: Size2D::new(width, height),
        }
    }

    /// Creates a rectangle from an origin point and a size.
    pub const fn from_origin_size(origin: Point2D<T>, size: Size2D<T>) -> Self {
        Rect { origin, size }
    }

    /// Creates an exact copy of `other`.
    pub fn from_rect(other: &Self) -> Self {
        *other
    }

    /// The degenerate rectangle `(0, 0, 0, 0)`.
    pub fn zero() -> Self {
        Rect::from_origin_size(Point2D::zero(), Size2D::zero())
    }

    /// Allocates a zeroed rectangle on the heap, to be filled with [`Rect::init`]
    /// or [`Rect::init_from_rect`].
    pub fn alloc() -> Box<Self> {
        Box::new(Self::zero())
    }

    /// Allocates a rectangle on the heap with the given values.
    pub fn boxed(x: T, y: T, width: T, height: T) -> Box<Self> {
        Box::new(Self::new(x, y, width, height))
    }

    /// Overwrites this rectangle with raw values, without normalizing.
    pub fn init(&mut self, x: T, y: T, width: T, height: T) -> &mut Self {
        *self = Self::new(x, y, width, height);
        self
    }

    /// Overwrites this rectangle with a copy of `other`.
    pub fn init_from_rect(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    // --- Bounds ---

    /// The smaller x edge.
    pub fn left(&self) -> T {
        nan_min(self.origin.x, self.origin.x + self.size.width)
    }

    /// The larger x edge.
    pub fn right(&self) -> T {
        nan_max(self.origin.x, self.origin.x + self.size.width)
    }

    /// The smaller y edge.
    pub fn top(&self) -> T {
        nan_min(self.origin.y, self.origin.y + self.size.height)
    }

    /// The larger y edge.
    pub fn bottom(&self) -> T {
        nan_max(self.origin.y, self.origin.y + self.size.height)
    }

    /// Normalized x of the origin. Same as [`Rect::left`].
    pub fn x(&self) -> T {
        self.left()
    }

    /// Normalized y of the origin. Same as [`Rect::top`].
    pub fn y(&self) -> T {
        self.top()
    }

    /// Normalized (non-negative) width.
    pub fn width(&self) -> T {
        self.size.width.abs()
    }

    /// Normalized (non-negative) height.
    pub fn height(&self) -> T {
        self.size.height.abs()
    }

    /// Area covered by the rectangle. Never negative.
    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    // --- Normalization ---

    /// Returns the same covered area with a non-negative size, so that the
    /// origin is the top-left corner.
    pub fn normalize(&self) -> Self {
        Rect::new(self.left(), self.top(), self.width(), self.height())
    }

    /// Normalizes this rectangle in place.
    pub fn normalize_in_place(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Returns `true` if both size components are non-negative.
    pub fn is_normalized(&self) -> bool {
        self.size.is_valid()
    }

    // --- Corners ---

    /// The corner with the smallest x and y.
    pub fn top_left(&self) -> Point2D<T> {
        Point2D::new(self.left(), self.top())
    }

    /// The corner with the largest x and smallest y.
    pub fn top_right(&self) -> Point2D<T> {
        Point2D::new(self.right(), self.top())
    }

    /// The corner with the smallest x and largest y.
    pub fn bottom_left(&self) -> Point2D<T> {
        Point2D::new(self.left(), self.bottom())
    }

    /// The corner with the largest x and y.
    pub fn bottom_right(&self) -> Point2D<T> {
        Point2D::new(self.right(), self.bottom())
    }

    /// The midpoint of the covered area.
    pub fn center(&self) -> Point2D<T> {
        let two = T::one() + T::one();
        Point2D::new(
            (self.left() + self.right()) / two,
            (self.top() + self.bottom()) / two,
        )
    }

    /// The four corners, clockwise from the top-left one.
    pub fn vertices(&self) -> [Point2D<T>; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    // --- Containment ---

    /// Checks if `point` lies inside the rectangle. Edges and corners count as
    /// inside, with the crate-wide tolerance applied at the edges.
    pub fn contains_point(&self, point: &Point2D<T>) -> bool {
        approx_le(self.left(), point.x)
            && approx_le(point.x, self.right())
            && approx_le(self.top(), point.y)
            && approx_le(point.y, self.bottom())
    }

    /// Checks if `other` lies entirely inside this rectangle. Shared edges count
    /// as inside, with the crate-wide tolerance applied at the edges.
    pub fn contains_rect(&self, other: &Self) -> bool {
        approx_le(self.left(), other.left())
            && approx_le(other.right(), self.right())
            && approx_le(self.top(), other.top())
            && approx_le(other.bottom(), self.bottom())
    }

    // --- Set operations ---

    /// Computes the overlap of two rectangles.
    ///
    /// Returns the overlap and `true`, or the zero rectangle and `false` when the
    /// rectangles do not overlap. Touching edges and zero-area overlaps count as
    /// no overlap, so a zero-size result on its own does not tell the two apart:
    /// check the flag.
    pub fn intersect(&self, other: &Self) -> (Self, bool) {
        let left = nan_max(self.left(), other.left());
        let top = nan_max(self.top(), other.top());
        let right = nan_min(self.right(), other.right());
        let bottom = nan_min(self.bottom(), other.bottom());

        if left < right && top < bottom {
            (Rect::new(left, top, right - left, bottom - top), true)
        } else {
            trace!(a = ?self, b = ?other, "rectangles do not overlap");
            (Self::zero(), false)
        }
    }

    /// Like [`Rect::intersect`], returning `None` when there is no overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        match self.intersect(other) {
            (rect, true) => Some(rect),
            (_, false) => None,
        }
    }

    /// Checks whether the two rectangles overlap with a non-zero area.
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersect(other).1
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        let left = nan_min(self.left(), other.left());
        let top = nan_min(self.top(), other.top());
        let right = nan_max(self.right(), other.right());
        let bottom = nan_max(self.bottom(), other.bottom());

        Rect::new(left, top, right - left, bottom - top)
    }

    // --- Translation and resizing ---

    /// Moves the origin by `(dx, dy)`. The size, including its sign, is unchanged.
    pub fn offset(&self, dx: T, dy: T) -> Self {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width,
            self.size.height,
        )
    }

    /// In-place form of [`Rect::offset`].
    pub fn offset_in_place(&mut self, dx: T, dy: T) -> &mut Self {
        *self = self.offset(dx, dy);
        self
    }

    /// Shrinks the normalized rectangle by `dx` on the left and right edges and
    /// by `dy` on the top and bottom edges. Negative values grow it.
    ///
    /// The result is not clamped: insetting by more than half the width or height
    /// yields a negative size.
    pub fn inset(&self, dx: T, dy: T) -> Self {
        let two = T::one() + T::one();
        let n = self.normalize();
        Rect::new(
            n.origin.x + dx,
            n.origin.y + dy,
            n.size.width - dx * two,
            n.size.height - dy * two,
        )
    }

    /// In-place form of [`Rect::inset`].
    pub fn inset_in_place(&mut self, dx: T, dy: T) -> &mut Self {
        *self = self.inset(dx, dy);
        self
    }

    /// Scales the normalized origin and size by independent horizontal and
    /// vertical factors.
    pub fn scale(&self, horizontal: T, vertical: T) -> Self {
        let n = self.normalize();
        Rect::new(
            n.origin.x * horizontal,
            n.origin.y * vertical,
            n.size.width * horizontal,
            n.size.height * vertical,
        )
    }

    /// Grows the rectangle just enough to also contain `point`.
    ///
    /// Each axis is handled on its own: a coordinate before the current range
    /// moves the origin there and grows the size by the same amount, one after
    /// the range only grows the size, and one inside the range changes nothing.
    pub fn expand(&self, point: &Point2D<T>) -> Self {
        let n = self.normalize();
        let (x, width) = expand_axis(n.origin.x, n.size.width, point.x);
        let (y, height) = expand_axis(n.origin.y, n.size.height, point.y);
        Rect::new(x, y, width, height)
    }

    // --- Pixel snapping ---

    /// Snaps the normalized rectangle to whole pixels by flooring the origin and
    /// taking the ceiling of the size.
    ///
    /// Idempotent. Because the size is rounded independently of the origin's
    /// fractional part, the far edges can end up inside the original; use
    /// [`Rect::round_extents`] when the result must contain the input.
    pub fn round_to_pixel(&self) -> Self {
        let n = self.normalize();
        Rect::new(
            n.origin.x.floor(),
            n.origin.y.floor(),
            n.size.width.ceil(),
            n.size.height.ceil(),
        )
    }

    /// In-place form of [`Rect::round_to_pixel`].
    pub fn round_to_pixel_in_place(&mut self) -> &mut Self {
        *self = self.round_to_pixel();
        self
    }

    /// Snaps every edge outward to the nearest whole pixel. The result always
    /// contains the input.
    pub fn round_extents(&self) -> Self {
        let left = self.left().floor();
        let top = self.top().floor();
        let right = self.right().ceil();
        let bottom = self.bottom().ceil();
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Rounds the normalized origin and size to the nearest whole pixel.
    pub fn round(&self) -> Self {
        let n = self.normalize();
        Rect::new(
            n.origin.x.round(),
            n.origin.y.round(),
            n.size.width.round(),
            n.size.height.round(),
        )
    }

    // --- Animation ---

    /// Linearly interpolates each of the four raw values towards `other`.
    ///
    /// `t == 0` yields `self`, `t == 1` yields `other`; other values extrapolate.
    pub fn interpolate(&self, other: &Self, t: T) -> Self {
        Rect::from_origin_size(
            self.origin.interpolate(&other.origin, t),
            self.size.interpolate(&other.size, t),
        )
    }

    // --- Validation ---

    /// Checks that no component is NaN or infinite.
    ///
    /// No other operation validates its input; this is the hook for callers
    /// that need to reject bad values before they propagate.
    pub fn check_finite(&self) -> Result<&Self, GeometryError> {
        if self.origin.is_finite() && self.size.is_finite() {
            Ok(self)
        } else {
            debug!(rect = %self, "rejecting non-finite rectangle");
            Err(GeometryError::NonFinite {
                what: format!("rectangle {}", self),
            })
        }
    }
}

// `Float::min`/`max` return the other operand when one is NaN; bounds must not
// hide a NaN that way.
fn nan_min<T: Scalar>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else {
        a.min(b)
    }
}

fn nan_max<T: Scalar>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else {
        a.max(b)
    }
}

/// Extends `[origin, origin + extent]` to cover `p`, returning the new origin and extent.
fn expand_axis<T: Scalar>(origin: T, extent: T, p: T) -> (T, T) {
    if p < origin {
        (p, extent + (origin - p))
    } else if p > origin + extent {
        (origin, p - origin)
    } else {
        (origin, extent)
    }
}

impl<T: Scalar> PartialEq for Rect<T> {
    fn eq(&self, other: &Self) -> bool {
        let a = self.normalize();
        let b = other.normalize();
        a.origin == b.origin && a.size == b.size
    }
}

impl<T: Scalar> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.origin, self.size)
    }
}
