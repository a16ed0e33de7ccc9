//! Configuration constants.
//!
//! This module defines the defaults used throughout the application,
//! including timeouts, extraction thresholds, and canonicalization suffixes.

use std::time::Duration;

/// Default site root when neither `--site-url` nor a profile supplies one.
pub const DEFAULT_SITE_URL: &str = "https://www.example.com";

/// Default User-Agent string for HTTP requests.
///
/// Identifies the tool honestly so site operators can recognize migration traffic in
/// their access logs. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "site_migrate/0.1 (+content migration; static HTML only)";

/// Per-request timeout in seconds for page and post fetches.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Timeout for a single image-existence check.
pub const IMAGE_VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Default output directory for the JSON dump, Markdown document and data module.
pub const DEFAULT_OUTPUT_DIR: &str = "./migrated";

// Blog discovery
/// Hard cap on listing pages visited by the blog crawler.
pub const MAX_LISTING_PAGES: usize = 10;
/// Path of the first blog listing page.
pub const DEFAULT_BLOG_PATH: &str = "/blog/";
/// Visible-text prefix of the "read more" anchors that point at posts.
pub const READ_MORE_PREFIX: &str = "Read More";

// Section extraction thresholds
/// Minimum paragraph length for text-editor and plain DOM paragraphs.
pub const MIN_PARAGRAPH_CHARS: usize = 10;
/// Minimum paragraph length for short widget text (icon boxes, toggles).
pub const MIN_WIDGET_TEXT_CHARS: usize = 5;
/// Minimum list item length.
pub const MIN_BULLET_CHARS: usize = 5;
/// Icon-box titles longer than this are not treated as a bold lead-in.
pub const MAX_ICON_BOX_TITLE_CHARS: usize = 80;
/// Heading used when widget-fallback text appears before any heading widget.
pub const FALLBACK_SECTION_HEADING: &str = "Overview";
/// Maximum excerpt length in characters for blog posts without a meta description.
pub const MAX_EXCERPT_CHARS: usize = 160;

// URL canonicalization
/// Reserved small "user" rendition suffix; upgraded to the large sibling.
pub const SMALL_USER_DIMENSION: &str = "-400x300";
/// Reserved large "user" rendition suffix; never stripped.
pub const LARGE_USER_DIMENSION: &str = "-1200x900";
/// Bare width-only small suffix.
pub const SMALL_WIDTH_SUFFIX: &str = "-400";
/// Replacement for [`SMALL_WIDTH_SUFFIX`].
pub const LARGE_WIDTH_SUFFIX: &str = "-1200";

// Output file names
pub const JSON_DUMP_FILE: &str = "content.json";
pub const MARKDOWN_DOC_FILE: &str = "content.md";
pub const DATA_MODULE_FILE: &str = "content-data.ts";
