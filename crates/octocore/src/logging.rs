//! Logging initialization and configuration checking
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - GitHub token configuration logging at startup

use anyhow::Result;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;

use crate::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to initialize logger
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs GitHub API configuration at application startup
///
/// Unauthenticated requests share GitHub's 60/hour per-IP rate limit,
/// which a busy bot exhausts quickly.
pub fn log_github_configuration() {
    if config::GITHUB_TOKEN.is_some() {
        log::info!("GITHUB_TOKEN is set - using authenticated GitHub API requests (5000 req/h)");
    } else {
        log::warn!("GITHUB_TOKEN is not set - falling back to unauthenticated requests (60 req/h)");
    }
    log::info!("GitHub API base: {}", *config::GITHUB_API_BASE);
}
