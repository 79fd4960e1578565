//! # NovaDE Geometry (`novade-geometry`)
//!
//! The axis-aligned rectangle primitive used by NovaDE layout, hit-testing,
//! clipping and animation code, together with the 2D point and size value
//! types it is built from.
//!
//! ## Overview
//!
//! - **Types**: [`Point2D`], [`Size2D`] and [`Rect`], generic over `f32`/`f64`,
//!   with the `f32` aliases [`Point`], [`Size`] and [`Rectangle`].
//! - **Operations**: normalization, tolerance-based equality, corner and center
//!   accessors, containment, intersection, union, offset, inset, pixel snapping,
//!   expansion to a point, and linear interpolation.
//! - **Error Handling**: [`GeometryError`] with [`ConfigError`] and [`LoggingError`].
//!   Geometry operations are total; errors come only from configuration, logging
//!   and the optional [`Rect::check_finite`] validation.
//! - **Configuration**: TOML logging settings loaded by [`ConfigLoader`].
//! - **Logging**: `tracing` based, see [`logging`].
//!
//! ## Usage
//!
//! ```
//! use novade_geometry::{Point, Rectangle};
//!
//! let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
//! let b = Rectangle::new(5.0, 5.0, 15.0, 15.0);
//!
//! let (overlap, hit) = a.intersect(&b);
//! assert!(hit);
//! assert_eq!(overlap, Rectangle::new(5.0, 5.0, 5.0, 5.0));
//!
//! let u = a.union(&b);
//! assert!(u.contains_rect(&a) && u.contains_rect(&b));
//! assert!(u.contains_point(&Point::new(20.0, 20.0)));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, GeometryConfig, LoggingConfig};
pub use error::{ConfigError, GeometryError, LoggingError};
pub use logging::{init_minimal_logging, initialize_logging};
pub use types::{rect_equal, zero_rect, Point, Point2D, Rect, Rectangle, Scalar, Size, Size2D};
pub use utils::approx_eq;
