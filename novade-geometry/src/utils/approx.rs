//! Fixed-tolerance floating point comparison.
//!
//! Every approximate comparison in this crate (point, size and rectangle equality,
//! and the predicates built on them) goes through [`approx_eq`]. The tolerance is a
//! constant so results are reproducible; there is intentionally no way for callers
//! to supply their own epsilon to `==`.

use num_traits::{Float, NumCast};

/// Number of machine epsilons two scalars may differ by, relative to their magnitude.
///
/// Two values `a` and `b` compare equal when `a == b`, or when
/// `|a - b| <= TOLERANCE_ULPS * ε * max(1, |a|, |b|)`, where `ε` is the machine
/// epsilon of the scalar type (`f32::EPSILON` or `f64::EPSILON`). Below a magnitude
/// of one the tolerance is absolute; above it, relative.
pub const TOLERANCE_ULPS: u8 = 4;

/// Returns the tolerance used when comparing `a` and `b`.
pub fn tolerance_for<T: Float>(a: T, b: T) -> T {
    let ulps = <T as NumCast>::from(TOLERANCE_ULPS).unwrap_or_else(T::one);
    let scale = T::one().max(a.abs()).max(b.abs());
    ulps * T::epsilon() * scale
}

/// Compares two scalars using the crate-wide tolerance.
///
/// NaN never compares equal, not even to itself. Infinities compare equal only to
/// an infinity of the same sign.
pub fn approx_eq<T: Float>(a: T, b: T) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() <= tolerance_for(a, b)
}

/// `a <= b`, or `a` and `b` equal within the tolerance.
///
/// Used by containment predicates so that edges recomputed through chained
/// arithmetic (unions, expansions) still count as contained.
pub fn approx_le<T: Float>(a: T, b: T) -> bool {
    a <= b || approx_eq(a, b)
}
