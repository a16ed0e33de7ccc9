//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Installs the global `env_logger` with `level` and the chosen line format.
///
/// `RUST_LOG` is read first, so per-module directives such as
/// `RUST_LOG=site_migrate::crawl=trace` still apply; `level` then sets the default
/// and the crate's own filter.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a global logger is already set.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // Parser noise on malformed markup
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("wiremock", LevelFilter::Warn);
    builder.filter_module("site_migrate", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "ts": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "msg": record.args().to_string(),
                });
                writeln!(buf, "{}", line)
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let (marker, colored_level) = match level {
                    log::Level::Error => ("❌", level.as_str().red()),
                    log::Level::Warn => ("⚠️", level.as_str().yellow()),
                    log::Level::Info => ("✔️", level.as_str().green()),
                    log::Level::Debug => ("🔍", level.as_str().blue()),
                    log::Level::Trace => ("🔬", level.as_str().purple()),
                };

                writeln!(
                    buf,
                    "{} {} {} [{}] {}",
                    chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                    marker,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
