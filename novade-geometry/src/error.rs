//! Error handling for NovaDE geometry.
//!
//! Geometry operations themselves are total and never fail. The error types here
//! cover the ambient parts of the crate (configuration loading and logging setup)
//! and the optional finite-input validation hook, [`crate::types::Rect::check_finite`].
//!
//! The main error type is [`GeometryError`], which wraps the more specific
//! [`ConfigError`] and [`LoggingError`].
//!
//! # Examples
//!
//! ```
//! use novade_geometry::{GeometryError, Rectangle};
//!
//! fn place(r: &Rectangle) -> Result<(), GeometryError> {
//!     r.check_finite()?;
//!     Ok(())
//! }
//!
//! assert!(place(&Rectangle::new(0.0, 0.0, 10.0, 10.0)).is_ok());
//! assert!(place(&Rectangle::new(f32::NAN, 0.0, 10.0, 10.0)).is_err());
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the geometry crate.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Errors related to configuration loading, parsing, or validation.
    /// Wraps a [`ConfigError`].
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// The logging system could not be initialized.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),

    /// Wraps a [`LoggingError`] raised while building log layers.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// A value that was required to be finite contained NaN or an infinity.
    #[error("Non-finite geometry: {what}")]
    NonFinite { what: String },
}

/// Error type for configuration-related operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Parsing succeeded but a value is out of range.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging setup.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// Failed to set or parse a log filter.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),

    /// An I/O error occurred during logging, such as failing to create the log directory.
    #[error("Logging I/O error: {0}")]
    IoError(#[from] io::Error),
}
