//! Error categorization.
//!
//! Maps fetch failures onto the counted [`ErrorType`] categories.

use super::stats::ProcessingStats;
use super::types::{ErrorType, FetchError};

/// Categorizes a [`FetchError`] into an [`ErrorType`].
///
/// Status failures are bucketed by code; network failures by the `reqwest` error kind.
pub fn categorize_fetch_error(error: &FetchError) -> ErrorType {
    match error {
        FetchError::Status { status, .. } => match status.as_u16() {
            404 => ErrorType::HttpRequestNotFound,
            403 => ErrorType::HttpRequestForbidden,
            _ if status.is_server_error() => ErrorType::HttpRequestServerError,
            _ => ErrorType::HttpRequestOtherStatus,
        },
        FetchError::Network { source, .. } => {
            if source.is_timeout() {
                ErrorType::HttpRequestTimeoutError
            } else if source.is_connect() {
                ErrorType::HttpRequestConnectError
            } else {
                ErrorType::HttpRequestOtherError
            }
        }
    }
}

/// Records a fetch failure in the run statistics.
pub fn update_error_stats(stats: &ProcessingStats, error: &FetchError) {
    stats.increment_error(categorize_fetch_error(error));
}
