//! Section accumulation primitives shared by every extraction strategy.

use std::collections::HashSet;

use scraper::ElementRef;

use crate::canonical::canonicalize;
use crate::config::{MAX_ICON_BOX_TITLE_CHARS, MIN_BULLET_CHARS};
use crate::dom::{self, static_selector};
use crate::models::{Image, Section};
use crate::video::{self, VideoSet};

use super::ExtractContext;

static_selector!(IMG, "img");

/// Whether list items are deduplicated on admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BulletMode {
    /// Structured list widgets and section-based lists.
    Deduped,
    /// Plain `<ul>`/`<ol>` inside a DOM-walk section.
    Unconditional,
}

/// Accumulates one section's content.
///
/// Paragraphs are deduplicated by exact string, images by original URL, videos by
/// platform ID. [`SectionBuilder::finish`] drops sections with no paragraphs,
/// bullets or images.
pub(crate) struct SectionBuilder<'a> {
    ctx: &'a ExtractContext<'a>,
    heading: String,
    heading_level: u8,
    paragraphs: Vec<String>,
    bullets: Vec<String>,
    images: Vec<Image>,
    seen_images: HashSet<String>,
    videos: VideoSet,
}

impl<'a> SectionBuilder<'a> {
    pub(crate) fn new(ctx: &'a ExtractContext<'a>, heading: &str, heading_level: u8) -> Self {
        Self {
            ctx,
            heading: dom::clean_text(heading),
            heading_level: heading_level.clamp(2, 4),
            paragraphs: Vec::new(),
            bullets: Vec::new(),
            images: Vec::new(),
            seen_images: HashSet::new(),
            videos: VideoSet::default(),
        }
    }

    pub(crate) fn heading(&self) -> &str {
        &self.heading
    }

    /// Admits a paragraph of at least `min_chars` characters once collapsed.
    pub(crate) fn push_paragraph(&mut self, raw: &str, min_chars: usize) -> bool {
        let text = dom::clean_text(raw);
        if text.chars().count() < min_chars || self.paragraphs.contains(&text) {
            return false;
        }
        self.paragraphs.push(text);
        true
    }

    pub(crate) fn push_bullet(&mut self, raw: &str, mode: BulletMode) -> bool {
        let text = dom::clean_text(raw);
        if text.chars().count() < MIN_BULLET_CHARS {
            return false;
        }
        if mode == BulletMode::Deduped && self.bullets.contains(&text) {
            return false;
        }
        self.bullets.push(text);
        true
    }

    /// Icon-box composition: `**title**: description` when both are present and the
    /// title is short, otherwise the bare description.
    pub(crate) fn push_icon_box(
        &mut self,
        title: Option<&str>,
        description: Option<&str>,
        min_chars: usize,
    ) -> bool {
        match compose_icon_box(title, description) {
            Some(text) => self.push_paragraph(&text, min_chars),
            None => false,
        }
    }

    /// Harvests content images from `scope` (itself included) into this section.
    pub(crate) fn harvest_images(&mut self, scope: ElementRef<'_>) {
        for img in scope.select(&IMG) {
            self.push_image(img);
        }
    }

    pub(crate) fn push_image(&mut self, img: ElementRef<'_>) {
        let Some(image) = self.ctx.content_image(img) else {
            return;
        };
        if self.seen_images.insert(image.original_url.clone()) {
            self.images.push(Image {
                section_context: Some(self.heading.clone()),
                ..image
            });
        }
    }

    /// Harvests widget and iframe videos from `scope` into this section.
    pub(crate) fn harvest_videos(&mut self, scope: ElementRef<'_>) {
        for found in video::resolve_in(scope, self.ctx.stats) {
            self.videos.insert(found.in_section(&self.heading));
        }
    }

    pub(crate) fn harvest_media(&mut self, scope: ElementRef<'_>) {
        self.harvest_images(scope);
        self.harvest_videos(scope);
    }

    pub(crate) fn finish(self) -> Option<Section> {
        let section = Section {
            heading: self.heading,
            heading_level: self.heading_level,
            paragraphs: self.paragraphs,
            bullets: self.bullets,
            images: self.images,
            videos: self.videos.into_vec(),
        };
        if section.has_content() {
            Some(section)
        } else {
            log::debug!("Discarding empty section '{}'", section.heading);
            None
        }
    }
}

pub(crate) fn compose_icon_box(title: Option<&str>, description: Option<&str>) -> Option<String> {
    let title = title.map(dom::clean_text).filter(|t| !t.is_empty());
    let description = description.map(dom::clean_text).filter(|d| !d.is_empty())?;
    match title {
        Some(title) if title.chars().count() <= MAX_ICON_BOX_TITLE_CHARS => {
            Some(format!("**{title}**: {description}"))
        }
        _ => Some(description),
    }
}

impl ExtractContext<'_> {
    /// Builds an untagged [`Image`] for an `<img>` whose source is a content image.
    pub(crate) fn content_image(&self, img: ElementRef<'_>) -> Option<Image> {
        let src = dom::image_source(img)?;
        let original_url = dom::resolve_url(self.base_url, src)?;
        if !self.classifier.is_content_image(&original_url) {
            log::trace!("Skipping non-content image {}", original_url);
            return None;
        }
        Some(Image {
            canonical_url: canonicalize(&original_url, self.classifier.asset_host()),
            alt_text: dom::attr(img, "alt").map(dom::clean_text).unwrap_or_default(),
            original_url,
            section_context: None,
        })
    }
}
