//! Log setup for the docscope binaries.
//!
//! Logs always go to a daily file per component. The CLI prints its plan on
//! stdout, so the optional terminal layer writes to stderr.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Overrides the log directory.
pub const LOG_DIR_ENV: &str = "DOCSCOPE_LOG_DIR";
/// Filter directives, checked before `RUST_LOG`.
pub const LOG_FILTER_ENV: &str = "DOCSCOPE_LOG";

/// `$DOCSCOPE_LOG_DIR`, else `$HOME/.docscope/logs`.
pub fn log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    let home = std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
    home.join(".docscope").join("logs")
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. The returned guard flushes the file
/// writer on drop. A second call keeps the first subscriber.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    let _ = std::fs::create_dir_all(&dir);

    // e.g. cli.2024-01-21
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, component));
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    guard
}
