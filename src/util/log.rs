// src/util/log.rs

//! Logger Utility - Provides file-based logging for the terminal UI.
//!
//! Nothing may be printed to stdout while the alternate screen is active, so
//! every message goes to one file per severity under the log directory. The
//! macros also emit a `tracing` event, which `main` routes to `trace.log`.
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::{LazyLock, OnceLock};
use chrono::Local;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Directory used when `STUDYFLOW_LOG_DIR` is not set.
pub const DEFAULT_LOG_DIR: &str = "./logs";

/// Global logger instance
pub static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new(&log_dir()));

/// Resolve the log directory from the environment.
pub fn log_dir() -> PathBuf {
    std::env::var("STUDYFLOW_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR))
}

/// `DEBUG=true` turns on debug logging; read once per process.
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("DEBUG").unwrap_or_default() == "true")
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn filename(&self) -> &str {
        match self {
            LogLevel::Error => "error.log",
            LogLevel::Warn => "warn.log",
            LogLevel::Info => "info.log",
            LogLevel::Debug => "debug.log",
        }
    }
}

/// Logger that writes to separate files by severity.
///
/// A file that cannot be opened is skipped; its messages are dropped rather
/// than taking the application down.
pub struct Logger {
    log_dir: PathBuf,
    error_file: Option<Mutex<File>>,
    warn_file: Option<Mutex<File>>,
    info_file: Option<Mutex<File>>,
    debug_file: Option<Mutex<File>>,
}

impl Logger {
    /// Create a new logger writing into `log_dir` (truncating previous runs).
    pub fn new(log_dir: &Path) -> Self {
        debug_enabled();

        let log_dir = log_dir.to_path_buf();
        let dir_ready = create_dir_all(&log_dir).is_ok();

        let open = |level: LogLevel| -> Option<Mutex<File>> {
            if !dir_ready {
                return None;
            }
            File::create(log_dir.join(level.filename())).ok().map(Mutex::new)
        };

        Self {
            error_file: open(LogLevel::Error),
            warn_file: open(LogLevel::Warn),
            info_file: open(LogLevel::Info),
            debug_file: open(LogLevel::Debug),
            log_dir,
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Write a log entry to the appropriate file
    fn write_log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}\n", timestamp, level.as_str(), message);

        let file = match level {
            LogLevel::Error => &self.error_file,
            LogLevel::Warn => &self.warn_file,
            LogLevel::Info => &self.info_file,
            LogLevel::Debug => &self.debug_file,
        };

        if let Some(Ok(mut file)) = file.as_ref().map(|f| f.lock()) {
            let _ = file.write_all(formatted.as_bytes());
            let _ = file.flush();
        }
    }

    pub fn error(&self, message: &str) {
        self.write_log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.write_log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.write_log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.write_log(LogLevel::Debug, message);
    }
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        tracing::error!("{}", message);
        $crate::util::log::LOGGER.error(&message);
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        tracing::warn!("{}", message);
        $crate::util::log::LOGGER.warn(&message);
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        tracing::info!("{}", message);
        $crate::util::log::LOGGER.info(&message);
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if $crate::util::log::debug_enabled() {
            let message = format!($($arg)*);
            tracing::debug!("{}", message);
            $crate::util::log::LOGGER.debug(&message);
        }
    }};
}
