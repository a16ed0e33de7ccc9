//! Section extraction.
//!
//! The legacy site renders pages in three incompatible shapes, so extraction is a
//! chain of strategies tried strictly in order:
//! 1. [`section_based`]: page-builder top-level sections, one section each
//! 2. [`dom_walk`]: heading boundaries inside the theme's content container
//! 3. [`widget_fallback`]: page-wide text-editor widgets re-segmented on headings
//!
//! The first strategy that yields at least one section wins; results are never
//! merged across strategies. Icon-box and toggle widgets are then harvested as
//! standalone sections whatever strategy won (see [`widgets`]).

mod builder;
mod dom_walk;
mod section_based;
mod widget_fallback;
mod widgets;

use scraper::Html;
use url::Url;

use crate::classify::Classifier;
use crate::error_handling::{InfoType, ProcessingStats};
use crate::models::Section;

pub(crate) use builder::{compose_icon_box, BulletMode, SectionBuilder};
pub use dom_walk::content_container;

/// Everything a strategy needs besides the document.
pub struct ExtractContext<'a> {
    pub classifier: &'a Classifier,
    /// URL of the page, used to resolve relative image sources.
    pub base_url: &'a Url,
    pub stats: &'a ProcessingStats,
}

/// A strategy returns the sections it could extract, possibly none.
type Strategy = fn(&Html, &ExtractContext<'_>) -> Vec<Section>;

/// Strategies in cascade order, each paired with the counter bumped when it wins.
const STRATEGIES: [(InfoType, Strategy); 3] = [
    (InfoType::SectionBasedStrategy, section_based::extract),
    (InfoType::DomWalkStrategy, dom_walk::extract),
    (InfoType::WidgetFallbackStrategy, widget_fallback::extract),
];

/// Result of running the cascade over one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub sections: Vec<Section>,
    /// The strategy whose output was accepted, `None` when every strategy came up empty.
    pub strategy: Option<InfoType>,
}

/// Runs the strategy cascade, then appends standalone icon-box and toggle sections.
pub fn extract_sections(document: &Html, ctx: &ExtractContext<'_>) -> Extraction {
    let (strategy, mut sections) = STRATEGIES
        .iter()
        .find_map(|(info, strategy)| {
            let sections = strategy(document, ctx);
            log::debug!("{} produced {} section(s)", info.as_str(), sections.len());
            (!sections.is_empty()).then_some((Some(*info), sections))
        })
        .unwrap_or((None, Vec::new()));

    if let Some(info) = strategy {
        ctx.stats.increment_info(info);
    }

    let standalone = widgets::extract(document, ctx, &sections);
    sections.extend(standalone);

    Extraction { sections, strategy }
}
