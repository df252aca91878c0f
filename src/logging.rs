//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG` and defaults to `estimator=info`. The
//! terminal UI owns stdout and stderr while running, so interactive sessions
//! log to a file instead.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "estimator=info";

/// File name inside the log directory.
pub const LOG_FILE_NAME: &str = "estimator.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to stderr, for headless runs.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Appends logs to [`LOG_FILE_NAME`] in `dir` through a background writer.
///
/// Buffered lines are flushed when the returned guard is dropped, so keep it
/// alive until the UI has exited.
pub fn init_file(dir: &Path) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(non_blocking)
        .try_init();
    Ok(guard)
}

/// `<data dir>/estimator`, when the platform has a data dir.
#[must_use]
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("estimator"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logging_creates_log_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let guard = init_file(&log_dir).unwrap();
        tracing::info!("file logging ready");
        drop(guard);

        assert!(log_dir.join(LOG_FILE_NAME).is_file());
    }

    #[test]
    fn default_log_dir_is_app_scoped() {
        if let Some(dir) = default_log_dir() {
            assert!(dir.ends_with("estimator"));
        }
    }
}
