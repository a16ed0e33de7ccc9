//! Document-level metadata readers.
//!
//! Each reader tries an ordered list of sources and returns the first non-empty
//! value. Builder post widgets (`.elementor-post-info__*`) are consulted after the
//! standard meta tags and theme markup.

use chrono::{DateTime, NaiveDate};
use scraper::{Html, Selector};
use url::Url;

use crate::dom::{self, static_selector};
use crate::error_handling::{ProcessingStats, WarningType};

static_selector!(H1, "h1");
static_selector!(OG_TITLE, "meta[property='og:title']");
static_selector!(TITLE, "title");
static_selector!(META_DESCRIPTION, "meta[name='description']");
static_selector!(OG_DESCRIPTION, "meta[property='og:description']");
static_selector!(OG_IMAGE, "meta[property='og:image']");

static_selector!(PUBLISHED_META, "meta[property='article:published_time']");
static_selector!(TIME_DATETIME, "time[datetime]");
static_selector!(POST_INFO_DATE, ".elementor-post-info__item--type-date");

static_selector!(SECTION_META, "meta[property='article:section']");
static_selector!(CATEGORY_LINK, "a[rel~='category']");
static_selector!(POST_INFO_TERMS, ".elementor-post-info__terms-list-item");
static_selector!(CAT_LINKS, ".cat-links a");

static_selector!(AUTHOR_META, "meta[name='author']");
static_selector!(POST_INFO_AUTHOR, ".elementor-post-info__item--type-author");
static_selector!(AUTHOR_LINK, "a[rel~='author']");

/// Date layouts seen in visible post bylines.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
];

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .map(dom::element_text)
        .find(|text| !text.is_empty())
}

fn first_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .filter_map(|meta| dom::attr(meta, "content"))
        .map(dom::clean_text)
        .find(|text| !text.is_empty())
}

/// Page title: the first `<h1>`, then `og:title`, then `<title>`.
pub fn extract_title(document: &Html) -> Option<String> {
    first_text(document, &H1)
        .or_else(|| first_content(document, &OG_TITLE))
        .or_else(|| extract_meta_title(document))
}

/// Text of the `<title>` element.
pub fn extract_meta_title(document: &Html) -> Option<String> {
    first_text(document, &TITLE)
}

/// Meta description, falling back to `og:description`.
///
/// A page with neither is counted as a [`WarningType::MissingMetaDescription`].
pub fn extract_meta_description(document: &Html, stats: &ProcessingStats) -> Option<String> {
    let description = first_content(document, &META_DESCRIPTION)
        .or_else(|| first_content(document, &OG_DESCRIPTION));
    if description.is_none() {
        stats.increment_warning(WarningType::MissingMetaDescription);
    }
    description
}

/// Absolute `og:image` URL.
pub fn extract_og_image(document: &Html, base: &Url) -> Option<String> {
    document
        .select(&OG_IMAGE)
        .filter_map(|meta| dom::attr(meta, "content"))
        .find_map(|href| dom::resolve_url(base, href))
}

/// Publication date as `YYYY-MM-DD`, or the raw text when no known layout matches.
pub fn extract_published_date(document: &Html) -> Option<String> {
    let raw = first_content(document, &PUBLISHED_META)
        .or_else(|| {
            document
                .select(&TIME_DATETIME)
                .find_map(|time| dom::attr(time, "datetime"))
                .map(str::to_string)
        })
        .or_else(|| first_text(document, &POST_INFO_DATE))?;
    Some(normalize_date(&raw).unwrap_or(raw))
}

/// Normalizes an RFC 3339 timestamp or a common byline date to `YYYY-MM-DD`.
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive().format("%Y-%m-%d").to_string());
    }
    // "2023-05-04T10:00:00" without an offset
    let date_part = raw.split('T').next().unwrap_or(raw);
    DATE_FORMATS
        .iter()
        .find_map(|format| {
            NaiveDate::parse_from_str(date_part, format)
                .or_else(|_| NaiveDate::parse_from_str(raw, format))
                .ok()
        })
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// Primary category name.
pub fn extract_category(document: &Html) -> Option<String> {
    first_content(document, &SECTION_META)
        .or_else(|| first_text(document, &CATEGORY_LINK))
        .or_else(|| first_text(document, &POST_INFO_TERMS))
        .or_else(|| first_text(document, &CAT_LINKS))
}

/// Author display name, with any "By " byline prefix removed.
pub fn extract_author(document: &Html) -> Option<String> {
    first_content(document, &AUTHOR_META)
        .or_else(|| first_text(document, &POST_INFO_AUTHOR))
        .or_else(|| first_text(document, &AUTHOR_LINK))
        .map(|author| {
            author
                .strip_prefix("By ")
                .map(str::to_string)
                .unwrap_or(author)
        })
        .filter(|author| !author.is_empty())
}
