//! Tracing configuration for Clipshelf
//!
//! Installs one global subscriber with:
//!
//! - an `EnvFilter` honoring `RUST_LOG`, with per-crate defaults
//! - a stderr layer (stdout is reserved for command output)
//! - a non-blocking file layer under `<data dir>/logs`
//!
//! `log` records from the polling runtime reach the same layers through the
//! subscriber's log bridge.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

const LOG_FILE_NAME: &str = "clipshelf.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives: debug in development, info otherwise.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("cs_platform={level}"),
        format!("cs_infra={level}"),
        // enigo logs every synthetic key event at debug
        "enigo=warn".to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// When `logs_dir` is `None` or cannot be created, only stderr is used.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>) -> anyhow::Result<()> {
    let is_dev = is_development();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(build_filter_directives(is_dev).join(","))
    });

    let stderr_writer = BoxMakeWriter::new(io::stderr);
    let file_writer = match logs_dir.map(build_file_writer) {
        Some(Ok(writer)) => Some(writer),
        Some(Err(err)) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            None
        }
        None => None,
    };

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
