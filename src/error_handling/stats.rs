//! Processing statistics tracking.
//!
//! Counts errors, warnings and informational events over one migration run so
//! the final summary can report what was skipped and why.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// Run statistics tracker.
///
/// Every category is pre-registered at zero so increments take `&self` and the
/// tracker can be shared by reference across the pipeline.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: ErrorType::iter().map(|e| (e, AtomicUsize::new(0))).collect(),
            warnings: WarningType::iter()
                .map(|w| (w, AtomicUsize::new(0)))
                .collect(),
            info: InfoType::iter().map(|i| (i, AtomicUsize::new(0))).collect(),
        }
    }

    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!("Error counter for {:?} was never registered", error);
        }
    }

    pub fn increment_warning(&self, warning: WarningType) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!("Warning counter for {:?} was never registered", warning);
        }
    }

    pub fn increment_info(&self, info_type: InfoType) {
        if let Some(counter) = self.info.get(&info_type) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!("Info counter for {:?} was never registered", info_type);
        }
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map_or(0, |c| c.load(Ordering::SeqCst))
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map_or(0, |c| c.load(Ordering::SeqCst))
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info
            .get(&info_type)
            .map_or(0, |c| c.load(Ordering::SeqCst))
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        InfoType::iter().map(|i| self.get_info_count(i)).sum()
    }

    /// Non-zero counters as `(label, count)` pairs, errors first, in enum order.
    pub fn nonzero_counts(&self) -> Vec<(&'static str, usize)> {
        let errors = ErrorType::iter().map(|e| (e.as_str(), self.get_error_count(e)));
        let warnings = WarningType::iter().map(|w| (w.as_str(), self.get_warning_count(w)));
        let info = InfoType::iter().map(|i| (i.as_str(), self.get_info_count(i)));
        errors
            .chain(warnings)
            .chain(info)
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
