//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (`FetchError`, `ExtractError`, `InitializationError`)
//! - Processing statistics tracking (errors, warnings, info metrics)
//! - Categorization of fetch failures into counted error types
//!
//! Counted categories are split into:
//! - **Errors**: a unit of work (page, post) could not be produced
//! - **Warnings**: the unit was produced but is incomplete (no sections, broken image)
//! - **Info**: which extraction strategy produced the sections, swallowed widget data

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{ErrorType, ExtractError, FetchError, InfoType, InitializationError, WarningType};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
        assert!(stats.nonzero_counts().is_empty());
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::TitleExtractError);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_warning(WarningType::EmptyExtraction);
        stats.increment_info(InfoType::DomWalkStrategy);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_warnings(), 1);
        assert_eq!(stats.total_info(), 1);
    }

    #[test]
    fn test_nonzero_counts_lists_errors_first() {
        let stats = ProcessingStats::new();
        stats.increment_info(InfoType::SectionBasedStrategy);
        stats.increment_error(ErrorType::TitleExtractError);
        stats.increment_error(ErrorType::TitleExtractError);

        let counts = stats.nonzero_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0], ("Title extract error", 2));
        assert_eq!(counts[1], ("Sections from builder sections", 1));
    }
}
