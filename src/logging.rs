//! Logging setup
//!
//! Structured, level-gated logging via `tracing`. CLI commands log to
//! stderr; the interactive browser routes log lines to a file next to the
//! executable so they never bleed into the alternate screen.
//!
//! Filtering follows `RUST_LOG`, defaulting to `dexgrid=info`.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dexgrid=info"))
}

/// Get the log file path (same directory as the executable)
fn log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dexgrid.log")
}

/// Initialize stderr logging for one-shot CLI commands
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize file logging for the TUI.
///
/// Returns the writer guard; dropping it flushes buffered lines, so the
/// caller must hold it for the lifetime of the session. Returns `None`
/// (and stays silent) when the log file cannot be created.
pub fn init_file() -> Option<WorkerGuard> {
    let file = std::fs::File::create(log_path()).ok()?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
