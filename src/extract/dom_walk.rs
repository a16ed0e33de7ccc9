//! Plain theme DOM strategy.
//!
//! Every qualifying `h1`..`h4` inside the primary content container is a boundary.
//! `h2`..`h4` boundaries open a section; `h1` is the page title and only closes the
//! previous one. A section owns the forward siblings of its heading up to the next
//! boundary, or up to a sibling that has a boundary nested inside it.

use scraper::{ElementRef, Html, Selector};

use crate::config::MIN_PARAGRAPH_CHARS;
use crate::dom::{self, static_selector};
use crate::models::Section;

use super::{BulletMode, ExtractContext, SectionBuilder};

static_selector!(ENTRY_CONTENT, ".entry-content");
static_selector!(ARTICLE_POST_CONTENT, "article .post-content");
static_selector!(MAIN_ARTICLE, "main article");
static_selector!(ARTICLE, "article");
static_selector!(MAIN, "main");
static_selector!(CONTENT_ID, "#content");
static_selector!(SITE_CONTENT, ".site-content");
static_selector!(BODY, "body");

static_selector!(BOUNDARY_CANDIDATE, "h1, h2, h3, h4");
static_selector!(PARAGRAPH, "p");
static_selector!(LIST_ITEM, "li");

/// Content containers, most specific first.
static CONTAINERS: [&std::sync::LazyLock<Selector>; 8] = [
    &ENTRY_CONTENT,
    &ARTICLE_POST_CONTENT,
    &MAIN_ARTICLE,
    &ARTICLE,
    &MAIN,
    &CONTENT_ID,
    &SITE_CONTENT,
    &BODY,
];

/// Tags that never carry editorial text.
const SKIPPED_TAGS: [&str; 8] = [
    "script", "style", "noscript", "nav", "form", "aside", "header", "footer",
];

/// The page's primary content container: the first match of the ordered container list.
pub fn content_container(document: &Html) -> Option<ElementRef<'_>> {
    CONTAINERS
        .iter()
        .find_map(|selector| document.select(selector).next())
}

pub(super) fn extract(document: &Html, ctx: &ExtractContext<'_>) -> Vec<Section> {
    let Some(container) = content_container(document) else {
        return Vec::new();
    };

    container
        .select(&BOUNDARY_CANDIDATE)
        .filter(|heading| is_boundary(*heading, ctx))
        .filter_map(|heading| {
            let level = dom::heading_level(heading)?;
            // h1 is a terminator only
            if level < 2 {
                return None;
            }
            extract_after(heading, level, ctx)
        })
        .collect()
}

fn is_boundary(element: ElementRef<'_>, ctx: &ExtractContext<'_>) -> bool {
    match dom::heading_level(element) {
        Some(1) => ctx.classifier.is_heading_text(&dom::element_text(element)),
        Some(2..=4) => ctx
            .classifier
            .is_section_heading(dom::tag_name(element), &dom::element_text(element)),
        _ => false,
    }
}

fn contains_boundary(element: ElementRef<'_>, ctx: &ExtractContext<'_>) -> bool {
    element
        .select(&BOUNDARY_CANDIDATE)
        .any(|nested| nested.id() != element.id() && is_boundary(nested, ctx))
}

fn extract_after(heading: ElementRef<'_>, level: u8, ctx: &ExtractContext<'_>) -> Option<Section> {
    let mut section = SectionBuilder::new(ctx, &dom::element_text(heading), level);

    for sibling in dom::next_sibling_elements(heading) {
        if is_boundary(sibling, ctx) || contains_boundary(sibling, ctx) {
            break;
        }
        let tag = dom::tag_name(sibling);
        if SKIPPED_TAGS.contains(&tag) {
            continue;
        }
        match tag {
            "p" => {
                section.push_paragraph(&dom::element_text(sibling), MIN_PARAGRAPH_CHARS);
            }
            "ul" | "ol" => {
                for li in sibling.select(&LIST_ITEM) {
                    section.push_bullet(&dom::element_text(li), BulletMode::Unconditional);
                }
            }
            _ => {
                for p in sibling.select(&PARAGRAPH) {
                    section.push_paragraph(&dom::element_text(p), MIN_PARAGRAPH_CHARS);
                }
                for li in sibling.select(&LIST_ITEM) {
                    section.push_bullet(&dom::element_text(li), BulletMode::Unconditional);
                }
            }
        }
        section.harvest_media(sibling);
    }

    section.finish()
}
