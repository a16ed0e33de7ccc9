//! Run resources.
//!
//! Everything a run needs before the first document is fetched: the resolved site
//! profile, the classifier built from it, the shared HTTP fetcher and the counters.

use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use url::Url;

use crate::classify::Classifier;
use crate::config::{Config, SiteProfile, MAX_LISTING_PAGES};
use crate::error_handling::ProcessingStats;
use crate::fetch::HttpFetcher;
use crate::initialization::init_client;

/// All resources initialized for one migration run.
pub struct RunResources {
    pub config: Config,
    pub site_url: Url,
    pub profile: SiteProfile,
    pub classifier: Classifier,
    pub fetcher: HttpFetcher,
    pub stats: ProcessingStats,
    pub start_time: Instant,
}

/// Resolves the site profile and builds the client, classifier and counters.
///
/// # Errors
///
/// Returns an error if the site URL does not parse, a `--profile` file cannot be
/// loaded, or the HTTP client cannot be built.
pub fn init_run_resources(config: Config) -> Result<RunResources> {
    let site_url = Url::parse(&config.site_url)
        .with_context(|| format!("Invalid site URL: {}", config.site_url))?;

    let mut profile = match &config.profile {
        Some(path) => {
            info!("Loading site profile from {}", path.display());
            SiteProfile::load(path).context("Failed to load site profile")?
        }
        None => SiteProfile::default(),
    };
    profile.fill_site_host(&config.site_url);

    let max_pages = config.max_blog_pages.unwrap_or(profile.crawl.max_pages);
    if max_pages > MAX_LISTING_PAGES {
        warn!(
            "Listing page cap {} exceeds the limit, using {}",
            max_pages, MAX_LISTING_PAGES
        );
    }
    profile.crawl.max_pages = max_pages.min(MAX_LISTING_PAGES);
    debug!(
        "Asset host {}, blog path {}, listing cap {}",
        profile.classifier.asset_host, profile.crawl.blog_path, profile.crawl.max_pages
    );

    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    Ok(RunResources {
        classifier: Classifier::new(&profile.classifier),
        fetcher: HttpFetcher::new(client),
        stats: ProcessingStats::new(),
        start_time: Instant::now(),
        site_url,
        profile,
        config,
    })
}
