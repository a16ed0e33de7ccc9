//! Units of work: the single page and the blog posts.

use anyhow::{Context, Result};
use log::{info, warn};
use url::Url;

use crate::app::{log_page_extracted, log_progress};
use crate::assemble::Assembler;
use crate::crawl::discover_post_urls;
use crate::error_handling::{update_error_stats, ErrorType, ExtractError};
use crate::models::{BlogCrawlResult, Page};

use super::resources::RunResources;

/// Fetches and assembles the configured page.
///
/// # Errors
///
/// A page that cannot be fetched is fatal to the run: the failure is counted and
/// returned with the page URL attached.
pub async fn extract_page(resources: &RunResources) -> Result<Page> {
    let page_url = resources.config.page_url();
    let url = Url::parse(&page_url).with_context(|| format!("Invalid page URL: {page_url}"))?;

    log_progress("page", 1, 1, &page_url);
    let html = match resources.fetcher.fetch_html(url.as_str()).await {
        Ok(html) => html,
        Err(e) => {
            update_error_stats(&resources.stats, &e);
            return Err(e).with_context(|| format!("Failed to fetch page {page_url}"));
        }
    };

    let page = Assembler::new(&resources.classifier, &resources.stats).page(&url, &html);
    log_page_extracted(&page);
    Ok(page)
}

/// Outcome of blog mode: the assembled result and how many posts were dropped.
pub struct BlogOutcome {
    pub result: BlogCrawlResult,
    pub skipped: usize,
}

/// Discovers every post URL, then fetches and assembles the posts one at a time.
///
/// Never fails: a post that cannot be fetched or has no title is logged, counted
/// and skipped.
pub async fn extract_blog(resources: &RunResources) -> BlogOutcome {
    let urls = discover_post_urls(
        &resources.fetcher,
        &resources.site_url,
        &resources.profile.crawl,
    )
    .await;
    info!("Discovered {} blog post URL(s)", urls.len());

    let assembler = Assembler::new(&resources.classifier, &resources.stats);
    let total = urls.len();
    let mut posts = Vec::with_capacity(total);
    let mut skipped = 0usize;

    for (index, post_url) in urls.iter().enumerate() {
        log_progress("post", index + 1, total, post_url);

        let Ok(url) = Url::parse(post_url) else {
            warn!("Skipping unparseable post URL {}", post_url);
            skipped += 1;
            continue;
        };
        let html = match resources.fetcher.fetch_html(url.as_str()).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Skipping post: {}", e);
                update_error_stats(&resources.stats, &e);
                skipped += 1;
                continue;
            }
        };

        match assembler.post(&url, &html) {
            Ok(post) => {
                log_page_extracted(&post.page);
                posts.push(post);
            }
            Err(e @ ExtractError::MissingTitle { .. }) => {
                warn!("Skipping post: {}", e);
                resources.stats.increment_error(ErrorType::TitleExtractError);
                skipped += 1;
            }
        }
    }

    BlogOutcome {
        result: BlogCrawlResult::from_posts(posts),
        skipped,
    }
}
