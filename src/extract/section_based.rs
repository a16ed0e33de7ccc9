//! Page-builder section strategy.
//!
//! Only runs when the builder's root marker is present. Each top-level section or
//! container becomes at most one section, headed by its first admissible heading
//! widget title (bare `h2`/`h3` as fallback).

use scraper::{ElementRef, Html};

use crate::config::MIN_PARAGRAPH_CHARS;
use crate::dom::{self, static_selector};
use crate::models::Section;

use super::{BulletMode, ExtractContext, SectionBuilder};

static_selector!(BUILDER_ROOT, "[data-elementor-type], .elementor");
static_selector!(TOP_LEVEL, ".elementor-top-section, .e-con.e-parent");
static_selector!(
    HEADING_WIDGET_TITLE,
    ".elementor-widget-heading .elementor-heading-title"
);
static_selector!(BARE_HEADING, "h2, h3");
static_selector!(PARAGRAPH, "p");
static_selector!(TEXT_EDITOR, ".elementor-widget-text-editor");
static_selector!(ICON_LIST_TEXT, ".elementor-icon-list-item .elementor-icon-list-text");
static_selector!(LIST_ITEM, "li");
// Paragraphs and list items under these are owned by another harvester.
static_selector!(
    FOREIGN_TEXT,
    ".elementor-widget-heading, .elementor-widget-icon-box, .elementor-widget-toggle, \
     .elementor-widget-accordion, .elementor-icon-list-items, nav, .elementor-nav-menu, form"
);

pub(super) fn extract(document: &Html, ctx: &ExtractContext<'_>) -> Vec<Section> {
    if document.select(&BUILDER_ROOT).next().is_none() {
        log::debug!("No page-builder root marker, skipping section strategy");
        return Vec::new();
    }

    document
        .select(&TOP_LEVEL)
        .filter_map(|container| {
            let (heading, level) = container_heading(container, ctx)?;
            extract_container(container, &heading, level, ctx)
        })
        .collect()
}

/// First heading widget title in `container` that qualifies, else the first bare h2/h3.
fn container_heading(container: ElementRef<'_>, ctx: &ExtractContext<'_>) -> Option<(String, u8)> {
    let qualifying = |el: ElementRef<'_>| {
        let text = dom::element_text(el);
        let level = dom::heading_level(el)?;
        ctx.classifier
            .is_section_heading(dom::tag_name(el), &text)
            .then_some((text, level))
    };
    container
        .select(&HEADING_WIDGET_TITLE)
        .find_map(&qualifying)
        .or_else(|| container.select(&BARE_HEADING).find_map(&qualifying))
}

fn extract_container(
    container: ElementRef<'_>,
    heading: &str,
    level: u8,
    ctx: &ExtractContext<'_>,
) -> Option<Section> {
    let mut section = SectionBuilder::new(ctx, heading, level);

    for p in container.select(&PARAGRAPH) {
        if !dom::has_ancestor(p, &FOREIGN_TEXT) {
            section.push_paragraph(&dom::element_text(p), MIN_PARAGRAPH_CHARS);
        }
    }
    // Text editors sometimes hold bare text with no <p> wrapper.
    for editor in container.select(&TEXT_EDITOR) {
        if !dom::contains(editor, &PARAGRAPH) {
            section.push_paragraph(&dom::element_text(editor), MIN_PARAGRAPH_CHARS);
        }
    }

    for item in container.select(&ICON_LIST_TEXT) {
        section.push_bullet(&dom::element_text(item), BulletMode::Deduped);
    }
    for li in container.select(&LIST_ITEM) {
        if !dom::has_ancestor(li, &FOREIGN_TEXT) {
            section.push_bullet(&dom::element_text(li), BulletMode::Deduped);
        }
    }

    section.harvest_media(container);
    section.finish()
}
