//! Run finalization: optional image verification, output files, summary.

use std::collections::HashSet;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::app::print_run_summary;
use crate::error_handling::WarningType;
use crate::export;
use crate::models::{BrokenImage, Page};

use super::resources::RunResources;
use super::MigrationReport;

/// Checks every canonical image URL of `pages` once, in page order.
///
/// Each failure becomes a [`BrokenImage`] note and a [`WarningType::BrokenImage`]
/// count. Records are never altered.
pub async fn verify_images<'p>(
    resources: &RunResources,
    pages: impl IntoIterator<Item = &'p Page>,
) -> Vec<BrokenImage> {
    let mut checked: HashSet<&str> = HashSet::new();
    let mut broken = Vec::new();

    for page in pages {
        for image in &page.all_images {
            if !checked.insert(image.canonical_url.as_str()) {
                continue;
            }
            if let Err(e) = resources.fetcher.verify_image(&image.canonical_url).await {
                warn!("Broken image on {}: {}", page.url, e);
                resources.stats.increment_warning(WarningType::BrokenImage);
                broken.push(BrokenImage {
                    page_url: page.url.clone(),
                    image_url: image.canonical_url.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "Verified {} image URL(s), {} broken",
        checked.len(),
        broken.len()
    );
    broken
}

/// Writes the outputs and prints the run summary.
///
/// # Errors
///
/// Returns an error if any output file cannot be written.
pub fn finalize_run(resources: &RunResources, mut report: MigrationReport) -> Result<MigrationReport> {
    export::write_all(&report, &resources.config.output_dir)
        .context("Failed to write migration outputs")?;

    report.elapsed_seconds = resources.start_time.elapsed().as_secs_f64();
    print_run_summary(&report, &resources.stats);
    Ok(report)
}
