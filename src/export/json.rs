//! JSON dump of the complete run.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{BlogCrawlResult, BrokenImage, Page};
use crate::MigrationReport;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDump<'a> {
    generated_at: String,
    pages: &'a [Page],
    blog: Option<&'a BlogCrawlResult>,
    broken_images: &'a [BrokenImage],
}

/// Pretty-printed JSON of every page, the blog result and any broken images.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &MigrationReport) -> Result<String> {
    let dump = JsonDump {
        generated_at: chrono::Utc::now().to_rfc3339(),
        pages: &report.pages,
        blog: report.blog.as_ref(),
        broken_images: &report.broken_images,
    };
    serde_json::to_string_pretty(&dump).context("Failed to serialize JSON dump")
}
