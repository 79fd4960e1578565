//! Default configuration values for NovaDE geometry.
//!
//! Used by `serde`'s `default` attribute on the configuration structures when a
//! value is not present in the configuration file.

use super::LoggingConfig;
use std::path::PathBuf;

/// Name of the configuration file inside the NovaDE configuration directory.
pub const CONFIG_FILE_NAME: &str = "geometry.toml";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "NOVADE_GEOMETRY_CONFIG";

/// Returns the default `LoggingConfig`.
///
/// Used by `GeometryConfig` if the `logging` section is missing.
pub(crate) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log file path (`None`, no file logging).
pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// Returns the default log format string (`"text"`).
pub(crate) fn default_log_format() -> String {
    "text".to_string()
}
