//! Tracing setup for the terminal binary.
//!
//! stdout belongs to the UI, so log lines go to ~/.river/river.log.

use super::paths::data_path;
use std::fs::OpenOptions;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "river.log";
pub const LOG_FILTER_ENV: &str = "RIVER_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Returns false if logging stays disabled
/// because the log file could not be opened or a subscriber already exists.
pub fn init_logging() -> bool {
    let file = match data_path(LOG_FILE).and_then(|path| {
        OpenOptions::new().create(true).append(true).open(path)
    }) {
        Ok(file) => file,
        Err(_) => return false,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init()
        .is_ok()
}
