//! Logging Setup
//!
//! Library code logs through the `log` macros. The binary installs a
//! `tracing` registry here with:
//! - a JSON file layer (daily rolling) in the app data directory
//! - a compact stderr layer for the CLI, so stdout stays clean for results
//! - a `tracing-log` bridge forwarding `log` records into the registry

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

const LOG_FILE_NAME: &str = "catalog-speller.log";

/// Resolved log directory (override or `<data dir>/catalog-speller/logs`).
pub fn log_dir(config: &LoggingConfig) -> PathBuf {
    config.log_dir.clone().unwrap_or_else(|| {
        dirs::data_dir()
            .map(|d| d.join("catalog-speller").join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    })
}

/// `RUST_LOG` wins over the configured level.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn file_writer(config: &LoggingConfig) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard, PathBuf) {
    let log_dir = log_dir(config);

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    (non_blocking, guard, log_dir)
}

/// Initialize logging for command-line use.
///
/// Returns a `WorkerGuard` which must be kept alive until exit so buffered
/// file logs are flushed.
pub fn init(config: &LoggingConfig) -> WorkerGuard {
    let (non_blocking, guard, log_dir) = file_writer(config);

    // File Layer: JSON format for easy parsing
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter(&config.level));

    // Stderr Layer: human-readable, warnings and up by default
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .compact()
        .with_target(false)
        .with_filter(env_filter(&config.stderr_level));

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer);
    install(subscriber);

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_NAME)
    );

    guard
}

/// Initialize logging for TUI mode.
///
/// Identical to [`init()`] but omits the stderr layer so log lines do not
/// corrupt the terminal while ratatui owns it.
pub fn init_tui(config: &LoggingConfig) -> WorkerGuard {
    let (non_blocking, guard, _) = file_writer(config);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter(&config.level));

    install(tracing_subscriber::registry().with(file_layer));

    guard
}

fn install<S>(subscriber: S)
where
    S: tracing::Subscriber + Send + Sync + 'static,
{
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {}", e);
        return;
    }

    // Redirect standard `log` macros to `tracing`
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }
}
