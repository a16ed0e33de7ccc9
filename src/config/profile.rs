//! Site profile: the rule sets injected into the classifier and the crawler.
//!
//! Every fixed pattern list the extractor relies on lives here instead of in
//! module-level globals, so a different site can be migrated by loading a JSON
//! profile (`--profile site.json`) and tests can build narrow rule sets directly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_BLOG_PATH, MAX_LISTING_PAGES, READ_MORE_PREFIX};
use crate::error_handling::InitializationError;

/// Rules deciding what counts as content versus site chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    /// Case-insensitive substrings marking logos, icons, badges and widget furniture.
    pub template_image_patterns: Vec<String>,
    /// Path fragments of the upload and media-library locations that host content images.
    pub content_path_markers: Vec<String>,
    /// Host of the asset CDN. Images served from it are content, and it is the only host
    /// the canonicalizer rewrites. Left empty, it becomes the site's own host.
    pub asset_host: String,
    /// Heading texts (compared case-insensitively) that never open a section.
    pub excluded_headings: Vec<String>,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            template_image_patterns: to_strings(&[
                "logo",
                "favicon",
                "-icon",
                "icon-",
                "/icons/",
                "facebook",
                "twitter",
                "instagram",
                "linkedin",
                "pinterest",
                "youtube-logo",
                "social",
                "badge",
                "trust",
                "bbb-",
                "google-review",
                "review-stars",
                "spinner",
                "loader",
                "loading",
                "placeholder",
                "gravatar",
                "avatar",
                "arrow",
                "elementor/assets",
                "sprite",
            ]),
            content_path_markers: to_strings(&["/wp-content/uploads/", "/media/library/"]),
            asset_host: String::new(),
            excluded_headings: to_strings(&[
                "related posts",
                "recent posts",
                "popular posts",
                "categories",
                "archives",
                "tags",
                "search",
                "share this post",
                "share this",
                "leave a comment",
                "leave a reply",
                "comments",
                "follow us",
                "quick links",
                "menu",
                "newsletter",
                "subscribe",
                "get in touch",
                "contact us",
                "you may also like",
            ]),
        }
    }
}

/// Rules steering blog discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlRules {
    /// Path of listing page 1; page `n` is `{blog_path}page/{n}/`.
    pub blog_path: String,
    /// Anchors whose visible text starts with this prefix are treated as post links.
    pub read_more_prefix: String,
    /// Substrings that disqualify a heading-wrapped anchor from being a post link.
    pub excluded_link_patterns: Vec<String>,
    /// CSS selector for the listing containers whose heading links are post candidates.
    pub listing_containers: String,
    /// Listing pages to visit. Values above [`MAX_LISTING_PAGES`] are clamped to it.
    pub max_pages: usize,
}

impl Default for CrawlRules {
    fn default() -> Self {
        Self {
            blog_path: DEFAULT_BLOG_PATH.to_string(),
            read_more_prefix: READ_MORE_PREFIX.to_string(),
            excluded_link_patterns: to_strings(&[
                "/page/",
                "/category/",
                "/tag/",
                "/author/",
                "/wp-content/",
                "/wp-admin/",
                "/wp-login",
                "/feed",
                "#",
                "?",
                ".jpg",
                ".jpeg",
                ".png",
                ".gif",
                ".webp",
                ".pdf",
            ]),
            listing_containers: ".elementor-posts-container, .elementor-posts, \
                                 .elementor-post, article, .post, .blog-posts, .posts-list"
                .to_string(),
            max_pages: MAX_LISTING_PAGES,
        }
    }
}

/// Complete, injectable description of the site being migrated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    pub classifier: ClassifierRules,
    pub crawl: CrawlRules,
}

impl SiteProfile {
    /// Builds the default profile for a site, pointing the asset host at the site's own host.
    pub fn for_site(site_url: &str) -> Self {
        let mut profile = Self::default();
        profile.fill_site_host(site_url);
        profile
    }

    /// Sets the asset host to the host of `site_url` when the rules leave it unset.
    pub fn fill_site_host(&mut self, site_url: &str) {
        if !self.classifier.asset_host.trim().is_empty() {
            return;
        }
        if let Some(host) = url::Url::parse(site_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
        {
            self.classifier.asset_host = host;
        }
    }

    /// Loads a profile from a JSON file. Missing fields fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ProfileError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, InitializationError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            InitializationError::ProfileError(format!("{}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            InitializationError::ProfileError(format!("{}: {}", path.display(), e))
        })
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
