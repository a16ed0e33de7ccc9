//! Final run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};
use crate::MigrationReport;

/// Prints error, warning, and info statistics to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    let total_warnings = error_stats.total_warnings();
    let total_info = error_stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = error_stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = error_stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}

/// Prints the counters followed by a one-line summary of the run.
pub fn print_run_summary(report: &MigrationReport, error_stats: &ProcessingStats) {
    print_error_statistics(error_stats);

    for broken in &report.broken_images {
        info!(
            "Broken image on {}: {} ({})",
            broken.page_url, broken.image_url, broken.reason
        );
    }

    let posts = report.blog.as_ref().map_or(0, |blog| blog.total_posts);
    info!(
        "✅ Migrated {} page{} and {} post{} ({} skipped) in {:.1}s - output in {}",
        report.pages.len(),
        if report.pages.len() == 1 { "" } else { "s" },
        posts,
        if posts == 1 { "" } else { "s" },
        report.skipped_posts,
        report.elapsed_seconds,
        report.output_dir.display()
    );
}
