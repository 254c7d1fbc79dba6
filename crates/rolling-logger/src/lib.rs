//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes every event twice:
//! - to a daily-rolling file (`{app}.log.YYYY-MM-DD`), keeping the newest
//!   `max_files` files
//! - to an in-memory circular buffer of the most recent lines
//!
//! `log` records are bridged, so libraries using the `log` facade end up in
//! the same places. Nothing is written to stdout.

mod buffer;
mod timer;

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub use buffer::LogBuffer;
pub use timer::LocalTimer;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The rolling appender failed to start
    #[error("failed to open log directory {path}: {source}")]
    Appender {
        path: PathBuf,
        source: tracing_appender::rolling::InitError,
    },
    #[error("failed to create log directory {path}: {source}")]
    CreateDir { path: PathBuf, source: std::io::Error },
    /// A global subscriber was already installed
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Tunables for [`init_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerOptions {
    /// Filter used when `RUST_LOG` is unset, e.g. `info` or `chore_core=debug`
    pub level: String,
    /// Rolled files kept on disk
    pub max_files: usize,
    /// Lines kept in memory
    pub buffer_lines: usize,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            max_files: 7,
            buffer_lines: 200,
        }
    }
}

/// Keeps the background file writer alive; drop it at shutdown to flush.
pub struct LoggerGuard {
    _worker: WorkerGuard,
    buffer: LogBuffer,
}

impl LoggerGuard {
    /// Most recent formatted lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.buffer.lines()
    }
}

/// Initialize with default options
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<LoggerGuard, LoggerError> {
    init_with(log_dir, app_name, &LoggerOptions::default())
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    options: &LoggerOptions,
) -> Result<LoggerGuard, LoggerError> {
    let appender = file_appender(log_dir.as_ref(), app_name, options.max_files)?;
    let (non_blocking, worker) = tracing_appender::non_blocking(appender);
    let buffer = LogBuffer::new(options.buffer_lines);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&options.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_timer(LocalTimer),
        )
        .with(
            fmt::layer()
                .with_writer(buffer.clone())
                .with_ansi(false)
                .with_target(false)
                .with_timer(LocalTimer),
        )
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(app = app_name, dir = %log_dir.as_ref().display(), "logging started");

    Ok(LoggerGuard {
        _worker: worker,
        buffer,
    })
}

/// Daily-rolling appender under `log_dir`, created if missing
pub fn file_appender(log_dir: &Path, app_name: &str, max_files: usize) -> Result<RollingFileAppender, LoggerError> {
    std::fs::create_dir_all(log_dir).map_err(|source| LoggerError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(format!("{app_name}.log"))
        .max_log_files(max_files.max(1))
        .build(log_dir)
        .map_err(|source| LoggerError::Appender {
            path: log_dir.to_path_buf(),
            source,
        })
}

pub fn info(message: &str) {
    tracing::info!("{}", message);
}

pub fn error(message: &str) {
    tracing::error!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_appender_creates_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");

        let mut appender = file_appender(&log_dir, "ChoreBoard", 3).expect("appender failed");
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = std::fs::read_dir(&log_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("ChoreBoard.log"));
    }

    // Only test in this binary that installs the global subscriber.
    #[test]
    fn test_init_with_buffers_lines() {
        let dir = tempfile::tempdir().unwrap();
        let options = LoggerOptions {
            level: "debug".to_string(),
            max_files: 2,
            buffer_lines: 16,
        };

        let guard = init_with(dir.path(), "ChoreBoard", &options).expect("init failed");
        info("board opened");
        error("backend down");
        log::warn!("bridged from log");

        let lines = guard.recent_lines();
        assert!(lines.iter().any(|l| l.contains("INFO") && l.contains("board opened")));
        assert!(lines.iter().any(|l| l.contains("ERROR") && l.contains("backend down")));
        assert!(lines.iter().any(|l| l.contains("bridged from log")));

        let again = init_with(dir.path(), "ChoreBoard", &options);
        assert!(matches!(again, Err(LoggerError::AlreadyInitialized(_))));
    }

    #[test]
    fn test_default_options() {
        let options = LoggerOptions::default();
        assert_eq!(options.level, "info");
        assert_eq!(options.max_files, 7);
        assert!(options.buffer_lines > 0);
    }
}
