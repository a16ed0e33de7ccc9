//! Queryable-tree helpers over a parsed HTML document.
//!
//! The extractors only need a handful of primitives: selector queries, attribute
//! and text reads, sibling and ancestor navigation, and URL resolution. They are
//! collected here on top of `scraper::ElementRef` so the extraction code reads in
//! terms of those primitives rather than the parser's API surface.

mod selector;

use scraper::{ElementRef, Selector};
use url::Url;

pub use selector::{parse_selector_unsafe, parse_selector_with_fallback};
pub(crate) use selector::static_selector;

/// Collapses every whitespace run to a single space and trims the ends.
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-collapsed text content of an element and its descendants.
pub fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

/// Lower-case tag name.
pub fn tag_name<'a>(element: ElementRef<'a>) -> &'a str {
    element.value().name()
}

/// Heading level for `h1`..`h6`, `None` for anything else.
pub fn heading_level(element: ElementRef<'_>) -> Option<u8> {
    match tag_name(element) {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Whether the element carries `class` in its class list.
pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Whether any proper ancestor of `element` matches `selector`.
pub fn has_ancestor(element: ElementRef<'_>, selector: &Selector) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| selector.matches(&ancestor))
}

/// Whether `element` has a proper descendant matching `selector`.
pub fn contains(element: ElementRef<'_>, selector: &Selector) -> bool {
    element.select(selector).any(|found| found.id() != element.id())
}

/// Following sibling elements, text and comment nodes skipped.
pub fn next_sibling_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.next_siblings().filter_map(ElementRef::wrap)
}

/// Trimmed, non-empty attribute value.
pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element
        .value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// The real source of an `<img>`, preferring lazy-load attributes over placeholder `src`s.
pub fn image_source<'a>(img: ElementRef<'a>) -> Option<&'a str> {
    let src = attr(img, "src").filter(|s| !s.starts_with("data:"));
    attr(img, "data-src")
        .or_else(|| attr(img, "data-lazy-src"))
        .or(src)
        .or_else(|| attr(img, "src"))
}

/// Resolves `href` against `base`, returning an absolute http(s) URL.
pub fn resolve_url(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with("data:") {
        return None;
    }
    let joined = base.join(href).ok()?;
    match joined.scheme() {
        "http" | "https" => Some(joined.to_string()),
        _ => None,
    }
}

/// Whether `candidate` is hosted on the same host as `base` (a leading `www.` is ignored).
pub fn same_domain(base: &Url, candidate: &str) -> bool {
    let Ok(parsed) = Url::parse(candidate) else {
        return false;
    };
    match (base.host_str(), parsed.host_str()) {
        (Some(a), Some(b)) => {
            a.trim_start_matches("www.")
                .eq_ignore_ascii_case(b.trim_start_matches("www."))
        }
        _ => false,
    }
}
