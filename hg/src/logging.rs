//! Console logging setup

use eyre::{Result, eyre};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{LogLevel, Settings};

/// Level filter for the configured settings
pub fn level_filter(settings: &Settings) -> LevelFilter {
    if !settings.logging.enable_console {
        return LevelFilter::OFF;
    }
    match settings.logging.level {
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
    }
}

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` directives are honoured on top of the configured level.
/// Fails if a global subscriber is already installed.
pub fn setup_logging(settings: &Settings) -> Result<()> {
    let level = level_filter(settings);

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre!("Failed to install log subscriber: {}", e))?;

    tracing::info!(mode = %settings.run_mode, "Logging initialized (level: {})", level);

    if settings.is_development() {
        debug!("Configuration loaded:");
        debug!(site_name = %settings.site_name, "Site name");
        debug!(output_dir = %settings.output_dir.display(), "Output directory");
        debug!(templates_dir = %settings.templates_dir.display(), "Templates directory");
        debug!(default_theme = %settings.default_theme, "Default theme");
        debug!(auto_open_browser = settings.auto_open_browser, "Auto open browser");
        debug!(log_level = %settings.logging.level, "Log level");
    }
    Ok(())
}
