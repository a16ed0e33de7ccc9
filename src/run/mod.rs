//! Migration run orchestration.
//!
//! Units of work run sequentially in a fixed order: the single page, then blog
//! discovery and each post. Image verification and output writing follow once all
//! records are assembled.

mod finalize;
mod resources;
mod task;

use std::path::PathBuf;

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::config::Config;
use crate::models::{BlogCrawlResult, BrokenImage, Page};

use finalize::{finalize_run, verify_images};
use resources::init_run_resources;
use task::{extract_blog, extract_page};

/// Results of a migration run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    /// Single-page records (at most one per run)
    pub pages: Vec<Page>,
    /// Blog result, present when the run included blog mode
    pub blog: Option<BlogCrawlResult>,
    /// Images that failed verification (empty unless `--verify-images`)
    pub broken_images: Vec<BrokenImage>,
    /// Posts dropped because they could not be fetched or had no title
    pub skipped_posts: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
    /// Directory the outputs were written to
    pub output_dir: PathBuf,
}

/// Runs a migration with the provided configuration.
///
/// # Errors
///
/// Returns an error if initialization fails, if the single page cannot be fetched,
/// or if the outputs cannot be written. Individual blog post failures are not
/// errors; they are counted in [`MigrationReport::skipped_posts`].
///
/// # Example
///
/// ```no_run
/// use site_migrate::{run_migration, Config, Mode};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     mode: Mode::All,
///     site_url: "https://www.acme-blinds.com".to_string(),
///     ..Default::default()
/// };
/// let report = run_migration(config).await?;
/// println!("{} page(s) migrated", report.pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_migration(config: Config) -> Result<MigrationReport> {
    let resources = init_run_resources(config)?;
    let mode = resources.config.mode;
    info!(
        "Starting {:?} migration of {}",
        mode, resources.config.site_url
    );

    let mut pages = Vec::new();
    if mode.includes_page() {
        pages.push(extract_page(&resources).await?);
    }

    let (blog, skipped_posts) = if mode.includes_blog() {
        let outcome = extract_blog(&resources).await;
        (Some(outcome.result), outcome.skipped)
    } else {
        (None, 0)
    };

    let broken_images = if resources.config.verify_images {
        let posts = blog.iter().flat_map(|b| b.posts.iter().map(|p| &p.page));
        verify_images(&resources, pages.iter().chain(posts)).await
    } else {
        Vec::new()
    };

    let report = MigrationReport {
        pages,
        blog,
        broken_images,
        skipped_posts,
        elapsed_seconds: 0.0,
        output_dir: resources.config.output_dir.clone(),
    };
    finalize_run(&resources, report)
}
