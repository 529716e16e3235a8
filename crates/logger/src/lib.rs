//! Logging infrastructure for roster.
//!
//! A small thread-safe logger appending timestamped lines to a file.
//! Logging before [`init`] is a silent no-op, so library crates and their
//! tests can log unconditionally.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug)]
struct Logger {
    min_level: LogLevel,
    /// Open log file (None if it could not be created)
    file: Option<File>,
}

impl Logger {
    fn new(file_path: Option<PathBuf>, min_level: LogLevel) -> Self {
        let mut file = file_path.and_then(|path| {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            // Truncate: each run starts a fresh log
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

        if let Some(file) = file.as_mut() {
            let _ = writeln!(file, "=== roster log start ===");
        }
        Self { min_level, file }
    }

    fn write_line(&mut self, level: LogLevel, message: String) {
        if level < self.min_level {
            return;
        }
        let Some(file) = self.file.as_mut() else {
            return;
        };

        let timestamp = Local::now().format("%H:%M:%S");
        let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Initialize the global logger.
///
/// Must be called once at startup; later calls are ignored. With
/// `file_path = None` (or an unwritable path) every message is dropped.
pub fn init(file_path: Option<PathBuf>, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, min_level)));
}

fn with_logger(f: impl FnOnce(&mut Logger)) {
    if let Some(lock) = LOGGER.get() {
        if let Ok(mut logger) = lock.lock() {
            f(&mut logger);
        }
    }
}

pub fn debug(message: impl Into<String>) {
    with_logger(|logger| logger.write_line(LogLevel::Debug, message.into()));
}

pub fn info(message: impl Into<String>) {
    with_logger(|logger| logger.write_line(LogLevel::Info, message.into()));
}

pub fn warn(message: impl Into<String>) {
    with_logger(|logger| logger.write_line(LogLevel::Warn, message.into()));
}

pub fn error(message: impl Into<String>) {
    with_logger(|logger| logger.write_line(LogLevel::Error, message.into()));
}
