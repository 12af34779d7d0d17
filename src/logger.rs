//! Custom logging module.
//!
//! This module provides a logger implementation that captures log entries and
//! forwards them to a shared buffer the UI renders in its log pane.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Number of entries kept for the log pane.
///
pub const MAX_LOG_ENTRIES: usize = 500;

/// Shared buffer of formatted log lines, oldest first.
///
pub type LogSink = Arc<Mutex<VecDeque<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Append an entry, dropping the oldest once the sink is full.
///
pub fn push_entry(sink: &LogSink, entry: String) {
    if let Ok(mut entries) = sink.lock() {
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }
}

/// Custom logger that captures logs to the sink
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    /// Return a logger writing records up to `level` into the given sink.
    ///
    pub fn with_sink(sink: LogSink, level: LevelFilter) -> Self {
        let logger = CustomLogger::new(level);
        logger.set_log_callback(Box::new(move |entry| push_entry(&sink, entry)));
        logger
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
        // A poisoned lock only costs the in-app log pane
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}
