//! Output serializers.
//!
//! Three renderings of the same final records: a JSON dump, a human-readable
//! Markdown document and a generated TypeScript data module. None of them
//! re-derives an extraction decision; they only format.

mod json;
mod markdown;
mod module;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{DATA_MODULE_FILE, JSON_DUMP_FILE, MARKDOWN_DOC_FILE};
use crate::MigrationReport;

pub use json::render_json;
pub use markdown::render_markdown;
pub use module::render_data_module;

/// Writes all three outputs into `dir`, creating it if needed.
///
/// # Returns
///
/// The paths written, in the order JSON, Markdown, data module.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, serialization fails, or a
/// file cannot be written.
pub fn write_all(report: &MigrationReport, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let outputs = [
        (JSON_DUMP_FILE, render_json(report)?),
        (MARKDOWN_DOC_FILE, render_markdown(report)),
        (DATA_MODULE_FILE, render_data_module(report)?),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (name, contents) in outputs {
        let path = dir.join(name);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
