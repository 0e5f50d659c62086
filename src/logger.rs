//! Logging setup.
//!
//! Records go through the `log` facade into a `fern` dispatcher. One chain
//! feeds the in-memory [`Logger`] buffer that the debug dialog shows; a
//! second, optional chain appends to a log file in the data directory.

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use log::LevelFilter;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::config::{Config, LoggingConfig};

/// Entries kept in memory before the oldest are dropped
pub const MAX_LOG_ENTRIES: usize = 500;

static LOG_BUFFER: Lazy<Logger> = Lazy::new(Logger::new);

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_ENTRIES {
                let overflow = logs.len() + 1 - MAX_LOG_ENTRIES;
                logs.drain(..overflow);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide buffer the dispatcher writes into
pub fn buffer() -> Logger {
    LOG_BUFFER.clone()
}

/// Path of the log file written when file logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(Config::get_data_dir()?.join("lostfound.log"))
}

/// Install the global logger. Returns the log file path when file logging is on.
///
/// # Errors
/// Fails if the log file cannot be opened or a logger is already installed
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let level = LevelFilter::from_str(&config.level).unwrap_or(LevelFilter::Info);
    let memory = buffer();

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn)
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(fern::Output::call(move |record| {
            memory.log(format!("{:<5} {}", record.level(), record.args()));
        }));

    let mut log_path = None;
    if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {:<5} {}] {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
        log_path = Some(path);
    }

    dispatch.apply().context("Failed to install logger")?;
    Ok(log_path)
}
