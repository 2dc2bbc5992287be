//! Custom logging module.
//!
//! This module provides a logger implementation that captures log entries
//! into the application state's debug buffer for display in the log view.

use crate::state::State;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::sync::Arc;
use tokio::sync::Mutex;

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

/// Logger that captures records into the state debug buffer.
///
pub struct StateLogger {
    state: Arc<Mutex<State>>,
}

impl StateLogger {
    /// Install a new instance as the global logger.
    ///
    pub fn init(state: Arc<Mutex<State>>) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(StateLogger { state }))?;
        log::set_max_level(LevelFilter::Info);
        Ok(())
    }
}

impl Log for StateLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Entries logged while the state lock is held are dropped rather
            // than blocking the render loop
            if let Ok(mut state) = self.state.try_lock() {
                state.add_log_entry(format_log(record));
            }
        }
    }

    fn flush(&self) {
        // No-op
    }
}
