//! Configuration management for NovaDE geometry.
//!
//! - [`types`]: [`GeometryConfig`] and [`LoggingConfig`].
//! - [`defaults`]: default values applied by `serde` for missing fields.
//! - [`loader`]: [`ConfigLoader`], which locates, parses and validates the TOML file.
//!
//! ## Loading process
//!
//! 1. `ConfigLoader::load()` takes the path from `$NOVADE_GEOMETRY_CONFIG`, or
//!    `geometry.toml` in the NovaDE configuration directory.
//! 2. A missing file yields the default configuration.
//! 3. The TOML content is parsed into [`GeometryConfig`]; parse failures map to
//!    [`crate::error::ConfigError::ParseError`].
//! 4. The result is validated (level and format normalized to lowercase, relative
//!    log paths made absolute).
//!
//! ```rust,ignore
//! use novade_geometry::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => novade_geometry::logging::initialize_logging(&config.logging, false)?,
//!     Err(e) => {
//!         novade_geometry::logging::init_minimal_logging();
//!         tracing::error!("Configuration error: {}", e);
//!     }
//! }
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{GeometryConfig, LoggingConfig};
