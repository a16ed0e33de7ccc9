//! Content versus chrome classification.
//!
//! Pure predicates deciding whether an image URL or a heading is editorial content
//! or site furniture (logos, social icons, trust badges, widget boilerplate). All
//! pattern sets come from the injected [`ClassifierRules`].

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ClassifierRules;

/// Builder counters render as big comma-grouped numbers ("92,103+") inside heading tags.
static FALSE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,3}(?:,\d{3})+").expect("false heading pattern is valid")
});

/// Classifier over one set of rules. Patterns are lower-cased once at construction.
#[derive(Debug, Clone)]
pub struct Classifier {
    template_patterns: Vec<String>,
    content_markers: Vec<String>,
    asset_host: String,
    excluded_headings: Vec<String>,
}

impl Classifier {
    pub fn new(rules: &ClassifierRules) -> Self {
        let lower = |items: &[String]| -> Vec<String> {
            items
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        };
        Self {
            template_patterns: lower(&rules.template_image_patterns),
            content_markers: lower(&rules.content_path_markers),
            asset_host: rules.asset_host.trim().to_lowercase(),
            excluded_headings: lower(&rules.excluded_headings),
        }
    }

    /// Host whose URLs the canonicalizer is allowed to rewrite.
    pub fn asset_host(&self) -> &str {
        &self.asset_host
    }

    /// True iff the URL contains any template-image pattern, case-insensitively.
    pub fn is_template_image(&self, url: &str) -> bool {
        let url = url.to_lowercase();
        self.template_patterns.iter().any(|p| url.contains(p.as_str()))
    }

    /// True iff the URL is a non-template image living on a content host or path.
    ///
    /// Content markers are matched against the path only; a relative URL is taken
    /// as all path.
    pub fn is_content_image(&self, url: &str) -> bool {
        let trimmed = url.trim();
        if trimmed.is_empty()
            || trimmed.to_ascii_lowercase().starts_with("data:")
            || self.is_template_image(trimmed)
        {
            return false;
        }
        let path = url::Url::parse(trimmed)
            .map(|u| u.path().to_lowercase())
            .unwrap_or_else(|_| trimmed.to_lowercase());
        self.content_markers.iter().any(|m| path.contains(m.as_str()))
            || self.is_on_asset_host(trimmed)
    }

    fn is_on_asset_host(&self, url: &str) -> bool {
        if self.asset_host.is_empty() {
            return false;
        }
        url::Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_lowercase))
            .is_some_and(|host| host == self.asset_host)
    }

    /// True iff `text` is a member of the excluded-heading set, ignoring case.
    pub fn is_excluded_heading(&self, text: &str) -> bool {
        let lower = text.trim().to_lowercase();
        self.excluded_headings.iter().any(|h| *h == lower)
    }

    /// Heading admissibility as a section boundary.
    ///
    /// `tag` must be `h2`..`h4`; the cleaned text must be non-empty, not excluded,
    /// and not a builder counter artifact.
    pub fn is_section_heading(&self, tag: &str, text: &str) -> bool {
        matches!(tag, "h2" | "h3" | "h4") && self.is_heading_text(text)
    }

    /// The text half of [`Self::is_section_heading`], shared with `h1` boundaries.
    pub fn is_heading_text(&self, text: &str) -> bool {
        let text = text.trim();
        !text.is_empty() && !self.is_excluded_heading(text) && !FALSE_HEADING.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(&ClassifierRules {
            asset_host: "cdn.acme.com".to_string(),
            ..ClassifierRules::default()
        })
    }

    #[test]
    fn test_template_images_are_case_insensitive() {
        let c = classifier();
        assert!(c.is_template_image("https://www.acme.com/wp-content/uploads/ACME-Logo.png"));
        assert!(c.is_template_image("/wp-content/uploads/facebook-square.svg"));
        assert!(!c.is_template_image("/wp-content/uploads/roller-blinds.jpg"));
    }

    #[test]
    fn test_content_image_requires_content_location() {
        let c = classifier();
        assert!(c.is_content_image("https://www.acme.com/wp-content/uploads/2023/04/shutters.jpg"));
        assert!(c.is_content_image("https://cdn.acme.com/images/shutters.jpg"));
        assert!(!c.is_content_image("https://stock.example.net/shutters.jpg"));
    }

    #[test]
    fn test_content_markers_only_match_the_path() {
        let c = classifier();
        assert!(!c.is_content_image(
            "https://cdn.other.net/proxy?src=/wp-content/uploads/x.jpg"
        ));
        assert!(!c.is_content_image("https://cdn.other.net/x.jpg#/media/library/"));
        assert!(c.is_content_image("/wp-content/uploads/2023/04/shutters.jpg"));
    }

    #[test]
    fn test_content_image_rejects_empty_data_and_template() {
        let c = classifier();
        assert!(!c.is_content_image(""));
        assert!(!c.is_content_image("   "));
        assert!(!c.is_content_image("data:image/png;base64,iVBORw0KGgo="));
        assert!(!c.is_content_image("https://cdn.acme.com/images/bbb-trust-badge.png"));
    }

    #[test]
    fn test_section_heading_tags() {
        let c = classifier();
        assert!(c.is_section_heading("h2", "Our Shutters"));
        assert!(c.is_section_heading("h4", "Measuring Guide"));
        assert!(!c.is_section_heading("h1", "Our Shutters"));
        assert!(!c.is_section_heading("h5", "Our Shutters"));
        assert!(!c.is_section_heading("p", "Our Shutters"));
    }

    #[test]
    fn test_excluded_headings_never_qualify() {
        let c = classifier();
        assert!(!c.is_section_heading("h2", "Related Posts"));
        assert!(!c.is_section_heading("h3", "RELATED POSTS"));
        assert!(!c.is_section_heading("h2", "  "));
        // Only exact membership is excluded
        assert!(c.is_section_heading("h2", "Related Posts About Blinds"));
    }

    #[test]
    fn test_false_headings_never_qualify() {
        let c = classifier();
        assert!(!c.is_section_heading("h2", "92,103"));
        assert!(!c.is_section_heading("h3", "1,250,000+ happy customers"));
        assert!(c.is_section_heading("h2", "2024 Collection"));
    }
}
