//! Page and post assembly.
//!
//! Composes the extraction cascade, the video resolver and the metadata readers
//! into one [`Page`] or [`BlogPost`] per fetched document.

mod content;
mod metadata;

use std::collections::HashSet;

use scraper::Html;
use url::Url;

use crate::classify::Classifier;
use crate::dom::static_selector;
use crate::error_handling::{ExtractError, ProcessingStats, WarningType};
use crate::extract::{self, content_container, ExtractContext};
use crate::models::{BlogPost, Image, Page, Section, Video};
use crate::video::{self, VideoSet};

pub use content::{
    excerpt, sections_to_markdown, sections_to_markdown_nested, slug_from_url, word_count,
};
pub use metadata::{
    extract_author, extract_category, extract_meta_description, extract_meta_title,
    extract_og_image, extract_published_date, extract_title, normalize_date,
};

static_selector!(IMG, "img");

/// Builds page and post records with one classifier and one stats tracker.
pub struct Assembler<'a> {
    classifier: &'a Classifier,
    stats: &'a ProcessingStats,
}

impl<'a> Assembler<'a> {
    pub fn new(classifier: &'a Classifier, stats: &'a ProcessingStats) -> Self {
        Self { classifier, stats }
    }

    /// Assembles a page record from its HTML.
    ///
    /// Never fails: a page whose extraction comes up empty is still returned, with
    /// no sections, and counted as [`WarningType::EmptyExtraction`].
    pub fn page(&self, url: &Url, html: &str) -> Page {
        let document = Html::parse_document(html);
        let title = extract_title(&document);
        self.build_page(url, &document, html, title)
    }

    /// Assembles a blog post record from its HTML.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MissingTitle`] when neither an `<h1>`, `og:title` nor
    /// `<title>` yields text. No partial record is built in that case.
    pub fn post(&self, url: &Url, html: &str) -> Result<BlogPost, ExtractError> {
        let document = Html::parse_document(html);
        let title = extract_title(&document).ok_or_else(|| ExtractError::MissingTitle {
            url: url.to_string(),
        })?;
        let page = self.build_page(url, &document, html, Some(title));

        let featured_image = page
            .og_image
            .clone()
            .or_else(|| page.all_images.first().map(|img| img.canonical_url.clone()));

        Ok(BlogPost {
            excerpt: excerpt(&page.meta_description, &page.sections),
            content: sections_to_markdown(&page.sections),
            featured_image,
            date: extract_published_date(&document),
            category: extract_category(&document),
            author: extract_author(&document),
            page,
        })
    }

    fn build_page(&self, url: &Url, document: &Html, html: &str, title: Option<String>) -> Page {
        let ctx = ExtractContext {
            classifier: self.classifier,
            base_url: url,
            stats: self.stats,
        };

        let extraction = extract::extract_sections(document, &ctx);
        let mut sections = extraction.sections;
        if sections.is_empty() {
            log::warn!("No content sections extracted from {}", url);
            self.stats.increment_warning(WarningType::EmptyExtraction);
        }

        let page_videos = video::resolve_page(document, html, self.stats);
        claim_videos(&mut sections, &page_videos);
        let all_videos = collect_videos(&sections, page_videos);
        let all_images = collect_images(&sections, document, &ctx);

        let slug = slug_from_url(url);
        let meta_title = extract_meta_title(document);
        let title = title
            .or_else(|| meta_title.clone())
            .unwrap_or_else(|| slug.clone());

        Page {
            url: url.to_string(),
            meta_title: meta_title.unwrap_or_else(|| title.clone()),
            meta_description: extract_meta_description(document, self.stats).unwrap_or_default(),
            og_image: extract_og_image(document, url),
            word_count: word_count(&sections),
            title,
            slug,
            sections,
            all_images,
            all_videos,
        }
    }
}

/// Adds to each section the page videos whose ID one of its paragraphs mentions.
fn claim_videos(sections: &mut [Section], page_videos: &[Video]) {
    for section in sections.iter_mut() {
        let claimed: Vec<Video> = video::claim_by_paragraph(page_videos, &section.paragraphs)
            .into_iter()
            .filter(|v| !section.videos.iter().any(|own| own.platform_id == v.platform_id))
            .map(|v| v.in_section(&section.heading))
            .collect();
        section.videos.extend(claimed);
    }
}

/// Page-wide video list, each tagged with the first section that holds it.
fn collect_videos(sections: &[Section], page_videos: Vec<Video>) -> Vec<Video> {
    let mut set = VideoSet::default();
    set.extend(page_videos);
    set.extend(sections.iter().flat_map(|s| s.videos.iter().cloned()));
    set.into_vec()
        .into_iter()
        .map(|v| {
            match sections
                .iter()
                .find(|s| s.videos.iter().any(|own| own.platform_id == v.platform_id))
            {
                Some(owner) => v.in_section(&owner.heading),
                None => v,
            }
        })
        .collect()
}

/// Section images first, then any other content image in the content container,
/// unique by original URL.
fn collect_images(sections: &[Section], document: &Html, ctx: &ExtractContext<'_>) -> Vec<Image> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut images: Vec<Image> = Vec::new();

    for image in sections.iter().flat_map(|s| s.images.iter()) {
        if seen.insert(image.original_url.clone()) {
            images.push(image.clone());
        }
    }

    if let Some(container) = content_container(document) {
        for image in container.select(&IMG).filter_map(|img| ctx.content_image(img)) {
            if seen.insert(image.original_url.clone()) {
                images.push(image);
            }
        }
    }

    images
}
