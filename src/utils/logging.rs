//! User-facing log helpers on top of the `log` facade.
//!
//! Output can be silenced entirely by setting `SOLANA_SWAP_INDEXER_SILENT`,
//! which benchmarks use to keep their output clean.

use colored::Colorize;

/// Severity of a user-facing log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
    Debug,
}

fn is_silent() -> bool {
    std::env::var_os("SOLANA_SWAP_INDEXER_SILENT").is_some()
}

/// Logs a message at the given level, colored for terminal output.
pub fn log(level: LogLevel, message: &str) {
    if is_silent() {
        return;
    }

    match level {
        LogLevel::Info => log::info!("{message}"),
        LogLevel::Success => log::info!("{}", message.green()),
        LogLevel::Warning => log::warn!("{}", message.yellow()),
        LogLevel::Error => log::error!("{}", message.red().bold()),
        LogLevel::Debug => log::debug!("{}", message.dimmed()),
    }
}

/// Logs a section banner.
pub fn log_section(title: &str) {
    if is_silent() {
        return;
    }
    log::info!("{}", format!("=== {title} ===").cyan().bold());
}
