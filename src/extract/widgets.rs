//! Standalone icon-box and toggle/accordion sections.
//!
//! These widgets are harvested page-wide after the cascade regardless of which
//! strategy won, each as a one-paragraph section. A widget whose paragraph already
//! appears in an earlier section is skipped.

use scraper::{ElementRef, Html};

use crate::config::{FALLBACK_SECTION_HEADING, MIN_WIDGET_TEXT_CHARS};
use crate::dom::{self, static_selector};
use crate::models::Section;

use super::{compose_icon_box, ExtractContext, SectionBuilder};

static_selector!(ICON_BOX, ".elementor-widget-icon-box");
static_selector!(ICON_BOX_TITLE, ".elementor-icon-box-title");
static_selector!(ICON_BOX_DESCRIPTION, ".elementor-icon-box-description");
static_selector!(TOGGLE_ITEM, ".elementor-toggle-item, .elementor-accordion-item");
static_selector!(TAB_TITLE, ".elementor-tab-title");
static_selector!(TAB_CONTENT, ".elementor-tab-content");

/// Level given to every standalone widget section.
const WIDGET_SECTION_LEVEL: u8 = 3;

pub(super) fn extract(
    document: &Html,
    ctx: &ExtractContext<'_>,
    existing: &[Section],
) -> Vec<Section> {
    let mut known: Vec<String> = existing
        .iter()
        .flat_map(|s| s.paragraphs.iter().cloned())
        .collect();
    let mut sections = Vec::new();

    let mut admit = |section: Option<Section>| {
        let Some(section) = section else { return };
        if section.paragraphs.iter().any(|p| known.contains(p)) {
            log::trace!("Skipping duplicate widget section '{}'", section.heading);
            return;
        }
        known.extend(section.paragraphs.iter().cloned());
        sections.push(section);
    };

    for icon_box in document.select(&ICON_BOX) {
        admit(icon_box_section(icon_box, ctx));
    }
    for item in document.select(&TOGGLE_ITEM) {
        admit(toggle_section(item, ctx));
    }

    sections
}

fn first_text(scope: ElementRef<'_>, selector: &scraper::Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(dom::element_text)
        .filter(|t| !t.is_empty())
}

fn icon_box_section(icon_box: ElementRef<'_>, ctx: &ExtractContext<'_>) -> Option<Section> {
    let title = first_text(icon_box, &ICON_BOX_TITLE);
    let description = first_text(icon_box, &ICON_BOX_DESCRIPTION);
    // Without a description there is nothing to say.
    compose_icon_box(title.as_deref(), description.as_deref())?;

    let heading = title
        .as_deref()
        .filter(|t| ctx.classifier.is_heading_text(t))
        .unwrap_or(FALLBACK_SECTION_HEADING);
    let mut section = SectionBuilder::new(ctx, heading, WIDGET_SECTION_LEVEL);
    section.push_icon_box(title.as_deref(), description.as_deref(), MIN_WIDGET_TEXT_CHARS);
    section.finish()
}

fn toggle_section(item: ElementRef<'_>, ctx: &ExtractContext<'_>) -> Option<Section> {
    let title = first_text(item, &TAB_TITLE)?;
    if !ctx.classifier.is_heading_text(&title) {
        return None;
    }
    let content = first_text(item, &TAB_CONTENT)?;

    let mut section = SectionBuilder::new(ctx, &title, WIDGET_SECTION_LEVEL);
    section.push_paragraph(&content, MIN_WIDGET_TEXT_CHARS);
    section.finish()
}
