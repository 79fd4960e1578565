//! Configuration loading for NovaDE geometry.
//!
//! [`ConfigLoader`] locates `geometry.toml`, deserializes it, applies defaults
//! and validates the result.
//!
//! ## Configuration file location
//!
//! `$NOVADE_GEOMETRY_CONFIG` wins when set. Otherwise the file is looked up in the
//! NovaDE configuration directory reported by `directories-next`
//! (`$XDG_CONFIG_HOME/novade/geometry.toml` on Linux). A missing file is not an
//! error; the default configuration is used.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use tracing::debug;

use super::defaults::{CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use super::GeometryConfig;
use crate::error::{ConfigError, GeometryError};

/// Namespace for the configuration loading functions.
pub struct ConfigLoader;

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("org", "NovaDE", "novade").ok_or_else(|| ConfigError::DirectoryUnavailable {
        dir_type: "home".to_string(),
    })
}

impl ConfigLoader {
    /// Loads and validates the configuration from its standard location.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DirectoryUnavailable`] if no home directory can be determined.
    /// - [`ConfigError::ReadError`] for I/O failures other than a missing file.
    /// - [`ConfigError::ParseError`] for malformed TOML or unknown keys.
    /// - [`ConfigError::ValidationError`] for out-of-range values.
    pub fn load() -> Result<GeometryConfig, GeometryError> {
        let path = Self::config_path()?;
        match fs::read_to_string(&path) {
            Ok(content) => Self::load_from_str(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no geometry configuration file, using defaults");
                Ok(Self::validate_config(GeometryConfig::default())?)
            }
            Err(e) => Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    /// Loads and validates the configuration from an explicit path.
    ///
    /// Unlike [`ConfigLoader::load`], a missing file is an error here.
    pub fn load_from_path(path: &Path) -> Result<GeometryConfig, GeometryError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::load_from_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    /// Empty or whitespace-only input yields the defaults.
    pub fn load_from_str(content: &str) -> Result<GeometryConfig, GeometryError> {
        let config = if content.trim().is_empty() {
            GeometryConfig::default()
        } else {
            toml::from_str::<GeometryConfig>(content).map_err(ConfigError::ParseError)?
        };
        Ok(Self::validate_config(config)?)
    }

    /// Path of the configuration file that [`ConfigLoader::load`] reads.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Normalizes and checks a parsed configuration.
    ///
    /// Level and format are lowercased. Relative log file paths are resolved
    /// against the NovaDE local data directory.
    pub fn validate_config(mut config: GeometryConfig) -> Result<GeometryConfig, ConfigError> {
        let level_lower = config.logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                )));
            }
        }

        let format_lower = config.logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => config.logging.format = format_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                )));
            }
        }

        if let Some(path) = &config.logging.file_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError("Log file path is empty.".to_string()));
            }
            if path.is_relative() {
                let absolute = project_dirs()?.data_local_dir().join(path);
                config.logging.file_path = Some(absolute);
            }
        }

        Ok(config)
    }
}
