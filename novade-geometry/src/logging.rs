//! Logging setup for NovaDE geometry.
//!
//! Built on the `tracing` ecosystem: a console layer on stdout plus an optional
//! daily-rolling file layer, each in text or JSON format. Geometry operations
//! emit `trace!`/`debug!` events for degenerate outcomes (empty intersections,
//! rejected non-finite input); nothing is printed unless a subscriber is installed.

use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;
use crate::error::{GeometryError, LoggingError};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps the file writer's worker alive so buffered lines are flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup on `stderr`.
///
/// Filters with `RUST_LOG`, falling back to "info". Meant for tests and for
/// running before a configuration is available. A subscriber that is already
/// installed is left in place.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Parses a configured level name (case-insensitive).
fn parse_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(LoggingError::FilterError(format!("Invalid log level in config: {}", other))),
    }
}

/// Creates the file logging layer and its worker guard.
///
/// Creates the parent directory of `log_path` when missing.
fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), LoggingError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)?;

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("geometry.log"));
    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer: BoxedLayer = match format.to_lowercase().as_str() {
        "json" => fmt::layer().json().with_writer(writer).with_ansi(false).boxed(),
        _ => fmt::layer().with_writer(writer).with_ansi(false).boxed(),
    };
    Ok((layer, guard))
}

/// Replaces the kept worker guard. Dropping the previous one flushes its writer.
fn store_worker_guard(guard: Option<WorkerGuard>) {
    match LOG_WORKER_GUARD.lock() {
        Ok(mut slot) => *slot = guard,
        Err(e) => eprintln!("[ERROR] Failed to lock LOG_WORKER_GUARD: {}. Log flushing may be affected.", e),
    }
}

/// Initializes the global logging system from a [`LoggingConfig`].
///
/// When `is_reload` is `true`, failing to replace an already installed
/// subscriber is reported on stderr and `Ok(())` is returned; otherwise it is
/// an error. The file writer of the installed subscriber keeps running either
/// way: its guard is only replaced once a new subscriber is in place.
///
/// # Errors
///
/// - [`GeometryError::Logging`] for an invalid level or a log directory that
///   cannot be created.
/// - [`GeometryError::LoggingInitialization`] if a global subscriber is already
///   set and `is_reload` is `false`.
pub fn initialize_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), GeometryError> {
    let level = parse_level(&config.level)?;

    let stdout_filter = EnvFilter::new(level.to_string());
    let stdout_layer: BoxedLayer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed(),
    };

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer];
    let mut new_guard = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer.with_filter(EnvFilter::new(level.to_string())).boxed());
        new_guard = Some(guard);
    }

    match Registry::default().with(layers).try_init() {
        Ok(()) => {
            store_worker_guard(new_guard);
            Ok(())
        }
        // The installed subscriber still writes through the old guard's worker,
        // so only the unused new guard is dropped.
        Err(e) if is_reload => {
            eprintln!("[INFO] Re-initializing logging configuration attempted. Previous logger may persist. Error: {}", e);
            Ok(())
        }
        Err(e) => Err(GeometryError::LoggingInitialization(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))),
    }
}
