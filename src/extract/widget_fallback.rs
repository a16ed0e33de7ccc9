//! Degenerate builder-widget strategy.
//!
//! Some builder pages have no usable sections and no theme container, only a flat
//! run of heading widgets and text-editor widgets. Widgets are visited page-wide in
//! document order; a qualifying heading widget opens a section, and a text editor
//! is re-segmented on any admissible `h2`..`h4` nested inside it. Text seen before
//! any heading goes under a generic opening section.

use scraper::{ElementRef, Html};

use crate::config::{FALLBACK_SECTION_HEADING, MIN_PARAGRAPH_CHARS};
use crate::dom::{self, static_selector};
use crate::models::Section;

use super::{BulletMode, ExtractContext, SectionBuilder};

static_selector!(
    WIDGET,
    ".elementor-widget-heading .elementor-heading-title, .elementor-widget-text-editor"
);
static_selector!(EDITOR_PARTS, "h2, h3, h4, p, li, img");
static_selector!(TEXT_BLOCK, "p, li");

pub(super) fn extract(document: &Html, ctx: &ExtractContext<'_>) -> Vec<Section> {
    let mut walker = Walker {
        ctx,
        current: None,
        sections: Vec::new(),
    };

    for widget in document.select(&WIDGET) {
        if dom::has_class(widget, "elementor-widget-text-editor") {
            walker.visit_editor(widget);
        } else {
            walker.visit_heading(widget);
        }
    }

    walker.finish()
}

struct Walker<'a> {
    ctx: &'a ExtractContext<'a>,
    current: Option<SectionBuilder<'a>>,
    sections: Vec<Section>,
}

impl<'a> Walker<'a> {
    /// Opens a new section if `element` is an admissible heading. Returns whether it did.
    fn open_if_heading(&mut self, element: ElementRef<'_>) -> bool {
        let Some(level) = dom::heading_level(element) else {
            return false;
        };
        let text = dom::element_text(element);
        if !self.ctx.classifier.is_section_heading(dom::tag_name(element), &text) {
            return false;
        }
        self.close();
        self.current = Some(SectionBuilder::new(self.ctx, &text, level));
        true
    }

    fn visit_heading(&mut self, title: ElementRef<'_>) {
        if !self.open_if_heading(title) {
            log::trace!("Heading widget '{}' does not qualify", dom::element_text(title));
        }
    }

    fn visit_editor(&mut self, editor: ElementRef<'_>) {
        if dom::contains(editor, &TEXT_BLOCK) {
            self.visit_parts(editor);
        } else {
            self.visit_bare_text(editor);
        }
        self.section().harvest_videos(editor);
    }

    fn visit_parts(&mut self, editor: ElementRef<'_>) {
        for part in editor.select(&EDITOR_PARTS) {
            if part.id() == editor.id() || self.open_if_heading(part) {
                continue;
            }
            match dom::tag_name(part) {
                "p" => {
                    self.section()
                        .push_paragraph(&dom::element_text(part), MIN_PARAGRAPH_CHARS);
                }
                "li" => {
                    self.section()
                        .push_bullet(&dom::element_text(part), BulletMode::Deduped);
                }
                "img" => self.section().push_image(part),
                _ => {}
            }
        }
    }

    /// Editor without paragraph markup: loose text runs between headings become
    /// paragraphs of the section they follow. Heading text itself is never a paragraph.
    fn visit_bare_text(&mut self, editor: ElementRef<'_>) {
        let mut pending = String::new();
        for node in editor.descendants() {
            if let Some(element) = ElementRef::wrap(node) {
                if dom::heading_level(element).is_some_and(|level| (2..=4).contains(&level))
                    && self.qualifies(element)
                {
                    self.flush_text(&mut pending);
                    self.open_if_heading(element);
                } else if dom::tag_name(element) == "img" {
                    self.section().push_image(element);
                }
                continue;
            }
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let in_heading = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .take_while(|ancestor| ancestor.id() != editor.id())
                .any(|ancestor| dom::heading_level(ancestor).is_some());
            if !in_heading {
                pending.push_str(text);
                pending.push(' ');
            }
        }
        self.flush_text(&mut pending);
    }

    fn qualifies(&self, heading: ElementRef<'_>) -> bool {
        let text = dom::element_text(heading);
        self.ctx
            .classifier
            .is_section_heading(dom::tag_name(heading), &text)
    }

    fn flush_text(&mut self, pending: &mut String) {
        let text = dom::clean_text(pending);
        pending.clear();
        if !text.is_empty() {
            self.section().push_paragraph(&text, MIN_PARAGRAPH_CHARS);
        }
    }

    /// The open section, creating the opening section on first use.
    fn section(&mut self) -> &mut SectionBuilder<'a> {
        let ctx = self.ctx;
        self.current
            .get_or_insert_with(|| SectionBuilder::new(ctx, FALLBACK_SECTION_HEADING, 2))
    }

    fn close(&mut self) {
        if let Some(section) = self.current.take().and_then(SectionBuilder::finish) {
            self.sections.push(section);
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.close();
        self.sections
    }
}
