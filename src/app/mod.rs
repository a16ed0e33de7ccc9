//! Console reporting for a migration run.
//!
//! Per-unit progress lines while the run is going, and the final summary with the
//! error, warning and info counters once it is over.

pub mod logging;
pub mod statistics;

pub use logging::{log_page_extracted, log_progress};
pub use statistics::{print_error_statistics, print_run_summary};
