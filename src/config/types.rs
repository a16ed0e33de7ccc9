//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_OUTPUT_DIR, DEFAULT_SITE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which units of work a run performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Extract one page (the site root, or `page_path`)
    Page,
    /// Discover and extract every blog post
    Blog,
    /// Both of the above
    All,
}

impl Mode {
    pub fn includes_page(self) -> bool {
        matches!(self, Mode::Page | Mode::All)
    }

    pub fn includes_blog(self) -> bool {
        matches!(self, Mode::Blog | Mode::All)
    }
}

/// Run configuration, parsed from the command line or built programmatically.
///
/// # Examples
///
/// ```no_run
/// use site_migrate::{Config, Mode};
///
/// let config = Config {
///     mode: Mode::Page,
///     page_path: Some("/services/".to_string()),
///     site_url: "https://www.acme-blinds.com".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "site_migrate",
    about = "Migrate page-builder content into structured records"
)]
pub struct Config {
    /// What to extract
    #[arg(value_enum, default_value_t = Mode::Page)]
    pub mode: Mode,

    /// Page path for single-page mode (defaults to the site root)
    pub page_path: Option<String>,

    /// Root URL of the site being migrated
    #[arg(long, env = "SITE_MIGRATE_URL", default_value = DEFAULT_SITE_URL)]
    pub site_url: String,

    /// Directory the JSON dump, Markdown document and data module are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Check that every extracted image URL resolves (5s timeout per image)
    #[arg(long)]
    pub verify_images: bool,

    /// JSON site profile overriding the built-in classifier and crawl rules
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Override the blog listing page cap
    #[arg(long)]
    pub max_blog_pages: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Page,
            page_path: None,
            site_url: DEFAULT_SITE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verify_images: false,
            profile: None,
            max_blog_pages: None,
        }
    }
}

impl Config {
    /// Absolute URL of the page extracted in single-page mode.
    pub fn page_url(&self) -> String {
        let base = self.site_url.trim_end_matches('/');
        match self.page_path.as_deref() {
            None | Some("") | Some("/") => format!("{}/", base),
            Some(path) if path.starts_with("http://") || path.starts_with("https://") => {
                path.to_string()
            }
            Some(path) => format!("{}/{}", base, path.trim_start_matches('/')),
        }
    }
}
