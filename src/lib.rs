//! site_migrate library: content migration for page-builder sites
//!
//! This library fetches pages and blog posts from a site built with a visual page
//! builder and turns each one into a structured record: headed sections with
//! paragraphs, bullets, content images and embedded videos, plus page metadata.
//! Site chrome (logos, navigation, theme decoration) is filtered out, image URLs are
//! canonicalized to their highest-resolution rendition, and the results are written
//! as a JSON dump, a Markdown document and a generated TypeScript data module.
//!
//! # Example
//!
//! ```no_run
//! use site_migrate::{run_migration, Config, Mode};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     mode: Mode::Blog,
//!     site_url: "https://www.acme-blinds.com".to_string(),
//!     output_dir: std::path::PathBuf::from("./out"),
//!     ..Default::default()
//! };
//!
//! let report = run_migration(config).await?;
//! println!("Migrated {} posts, skipped {}",
//!          report.blog.map_or(0, |b| b.total_posts), report.skipped_posts);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod assemble;
pub mod canonical;
pub mod classify;
pub mod config;
pub mod crawl;
pub mod dom;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod models;
mod run;
pub mod video;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Mode, SiteProfile};
pub use run::{run_migration, MigrationReport};
