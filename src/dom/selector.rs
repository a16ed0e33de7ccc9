//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`). Used for selectors that come from a site profile at runtime.
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        parse_selector_unsafe("*:not(*)", "fallback selector")
    })
}

/// Parses a CSS selector that must succeed (for the static selectors in this crate).
///
/// # Panics
///
/// Panics if the selector cannot be parsed, which indicates a programming error.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Declares a lazily parsed static selector.
///
/// ```ignore
/// static_selector!(IMG, "img");
/// ```
macro_rules! static_selector {
    ($name:ident, $css:expr) => {
        static $name: std::sync::LazyLock<scraper::Selector> = std::sync::LazyLock::new(|| {
            $crate::dom::parse_selector_unsafe($css, stringify!($name))
        });
    };
}

pub(crate) use static_selector;

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_fallback_selector_matches_nothing() {
        let selector = parse_selector_with_fallback("div[", "test");
        let doc = Html::parse_document("<div>a</div><p>b</p>");
        assert_eq!(doc.select(&selector).count(), 0);
    }

    #[test]
    fn test_valid_selector_parses() {
        let selector = parse_selector_with_fallback("h2, h3", "test");
        let doc = Html::parse_document("<h2>a</h2><h3>b</h3>");
        assert_eq!(doc.select(&selector).count(), 2);
    }

    #[test]
    #[should_panic(expected = "programming error")]
    fn test_unsafe_selector_panics_on_invalid() {
        parse_selector_unsafe(":::", "test");
    }
}
