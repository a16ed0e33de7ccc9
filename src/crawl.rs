//! Blog discovery.
//!
//! Walks the paginated blog listing (`{blog_path}`, `{blog_path}page/2/`, ...) one
//! page at a time and collects post URLs in first-seen order. The walk is bounded:
//! it stops at the page cap (never more than ten pages), on a listing page that
//! fails to fetch, on a page that adds no new URL, or on a page without a "next
//! page" control.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::{CrawlRules, MAX_LISTING_PAGES};
use crate::dom::{self, parse_selector_with_fallback, static_selector};
use crate::fetch::HttpFetcher;

static_selector!(ANCHOR, "a[href]");
static_selector!(HEADING_ANCHOR, "h2 a[href], h3 a[href]");
static_selector!(
    NEXT_CONTROL,
    "a.next, .elementor-pagination a.next, a[rel~='next'], .nav-links .next, link[rel='next']"
);

/// What one listing page contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// Normalized candidate post URLs in document order, possibly with repeats.
    pub candidates: Vec<String>,
    pub has_next: bool,
}

/// Listing pages and the heuristics used to read them.
pub struct BlogCrawler<'a> {
    fetcher: &'a HttpFetcher,
    site_url: &'a Url,
    rules: &'a CrawlRules,
    listing_containers: Selector,
}

impl<'a> BlogCrawler<'a> {
    pub fn new(fetcher: &'a HttpFetcher, site_url: &'a Url, rules: &'a CrawlRules) -> Self {
        Self {
            fetcher,
            site_url,
            rules,
            listing_containers: parse_selector_with_fallback(
                &rules.listing_containers,
                "listing containers",
            ),
        }
    }

    /// URL of listing page `n` (1-based).
    pub fn listing_url(&self, n: usize) -> Option<Url> {
        let mut blog_path = self.rules.blog_path.trim().to_string();
        if !blog_path.ends_with('/') {
            blog_path.push('/');
        }
        let path = if n <= 1 {
            blog_path
        } else {
            format!("{blog_path}page/{n}/")
        };
        self.site_url.join(&path).ok()
    }

    /// Discovers post URLs across the listing, in first-seen order.
    ///
    /// Never fails: a listing page that cannot be fetched simply ends the walk.
    pub async fn discover(&self) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut posts: Vec<String> = Vec::new();

        for n in 1..=self.rules.max_pages.min(MAX_LISTING_PAGES) {
            let Some(page_url) = self.listing_url(n) else {
                log::warn!("Cannot build listing URL for page {}", n);
                break;
            };
            let html = match self.fetcher.fetch_html(page_url.as_str()).await {
                Ok(html) => html,
                Err(e) => {
                    log::info!("Listing page {} unavailable, stopping: {}", n, e);
                    break;
                }
            };

            let listing = self.read_listing(&html, &page_url);
            let before = posts.len();
            for url in listing.candidates {
                if seen.insert(url.clone()) {
                    posts.push(url);
                }
            }
            let added = posts.len() - before;
            log::info!("Listing page {}: {} new post URL(s)", n, added);

            if added == 0 {
                break;
            }
            if !listing.has_next {
                log::debug!("No next-page control on listing page {}", n);
                break;
            }
        }

        posts
    }

    /// Extracts candidate post URLs and the presence of a next-page control.
    pub fn read_listing(&self, html: &str, page_url: &Url) -> ListingPage {
        let document = Html::parse_document(html);
        let mut candidates = Vec::new();

        // Unambiguous "Read More" links.
        for anchor in document.select(&ANCHOR) {
            let text = dom::element_text(anchor);
            if !text.starts_with(&self.rules.read_more_prefix) {
                continue;
            }
            if let Some(url) = self
                .resolve_same_domain(anchor, page_url)
                .and_then(|absolute| normalize_post_url(&absolute))
            {
                candidates.push(url);
            }
        }

        // Post titles inside listing containers.
        for anchor in document.select(&HEADING_ANCHOR) {
            if !dom::has_ancestor(anchor, &self.listing_containers) {
                continue;
            }
            let Some(absolute) = self.resolve_same_domain(anchor, page_url) else {
                continue;
            };
            if self.is_excluded(&absolute) {
                continue;
            }
            if let Some(url) = normalize_post_url(&absolute) {
                candidates.push(url);
            }
        }

        ListingPage {
            candidates,
            has_next: document.select(&NEXT_CONTROL).next().is_some(),
        }
    }

    /// Absolute href of `anchor` when it points at the site's own domain.
    fn resolve_same_domain(&self, anchor: ElementRef<'_>, page_url: &Url) -> Option<String> {
        let href = dom::attr(anchor, "href")?;
        let absolute = dom::resolve_url(page_url, href)?;
        dom::same_domain(self.site_url, &absolute).then_some(absolute)
    }

    fn is_excluded(&self, url: &str) -> bool {
        let lower = url.to_lowercase();
        self.rules
            .excluded_link_patterns
            .iter()
            .any(|pattern| lower.contains(&pattern.to_lowercase()))
    }
}

/// Drops the fragment and gives the path a trailing slash.
pub fn normalize_post_url(url: &str) -> Option<String> {
    let mut parsed = Url::parse(url).ok()?;
    parsed.set_fragment(None);
    if !parsed.path().ends_with('/') {
        let path = format!("{}/", parsed.path());
        parsed.set_path(&path);
    }
    Some(parsed.to_string())
}

/// Discovers blog post URLs for `site_url` under `rules`.
pub async fn discover_post_urls(
    fetcher: &HttpFetcher,
    site_url: &Url,
    rules: &CrawlRules,
) -> Vec<String> {
    BlogCrawler::new(fetcher, site_url, rules).discover().await
}
