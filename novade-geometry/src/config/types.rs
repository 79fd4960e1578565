//! Configuration data structures for NovaDE geometry.
//!
//! Populated by deserializing TOML. Missing fields take the values from
//! [`super::defaults`]; unknown fields are rejected.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults;

/// Configuration settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use novade_geometry::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let default_log_config = LoggingConfig::default();
/// assert_eq!(default_log_config.level, "info");
/// assert_eq!(default_log_config.file_path, None);
/// assert_eq!(default_log_config.format, "text");
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/novade_geometry.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/novade_geometry.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level to record: "trace", "debug", "info", "warn" or "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths are resolved against the NovaDE data directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// Output format: "text" or "json" (case-insensitive).
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Root configuration structure for NovaDE geometry.
///
/// Geometry comparisons use a fixed tolerance, so the only configurable concern
/// is logging.
///
/// ```
/// use novade_geometry::config::GeometryConfig;
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
/// "#;
/// let config: GeometryConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(config.logging.level, "warn");
/// assert_eq!(config.logging.format, "text");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeometryConfig {
    /// Configuration for the logging subsystem.
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
        }
    }
}
