//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, extraction thresholds, canonical suffixes)
//! - CLI option types and parsing
//! - The injectable site profile (classifier and crawl rule sets)

mod constants;
mod profile;
mod types;

// Re-export all constants
pub use constants::*;
pub use profile::{ClassifierRules, CrawlRules, SiteProfile};
pub use types::{Config, LogFormat, LogLevel, Mode};
