//! File logging for bujo-labels.
//!
//! Library code logs through the `log` macros; the binary installs a `fern`
//! dispatcher writing to a log file when logging is enabled in the config.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};

/// Install the global logger described by `config`.
///
/// Does nothing when logging is disabled. Can only succeed once per process.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = parse_level(&config.level)?;
    let path = match &config.file {
        Some(file) => file.clone(),
        None => get_log_file_path()?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // SQL statement logging is noisy at info
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn)
        .chain(file)
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging to {} at level {}", path.display(), level);
    Ok(())
}

/// Parse a level name such as "info" (case-insensitive)
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", level))
}

/// Default log file location in the user cache directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}
