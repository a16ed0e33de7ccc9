//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_migrate` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_migrate::initialization::init_logger_with;
use site_migrate::{run_migration, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // SITE_MIGRATE_URL may come from a .env file next to the working directory
    dotenvy::dotenv().ok();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_migration(config).await {
        Ok(report) => {
            let posts = report.blog.as_ref().map_or(0, |blog| blog.total_posts);
            println!(
                "✅ Migrated {} page{} and {} post{} in {:.1}s",
                report.pages.len(),
                if report.pages.len() == 1 { "" } else { "s" },
                posts,
                if posts == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.output_dir.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("site_migrate error: {:#}", e);
            process::exit(1);
        }
    }
}
