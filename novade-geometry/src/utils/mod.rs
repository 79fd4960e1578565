//! General utilities for NovaDE geometry.
//!
//! # Submodules
//!
//! - [`approx`]: the fixed tolerance used by every approximate scalar comparison.

pub mod approx;

pub use approx::{approx_eq, approx_le, TOLERANCE_ULPS};
