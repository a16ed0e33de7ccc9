//! Derived page fields: slug, word count, excerpt and the Markdown body.

use url::Url;

use crate::config::MAX_EXCERPT_CHARS;
use crate::models::Section;

/// Last non-empty path segment, or `home` for the site root.
pub fn slug_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map_or_else(|| "home".to_string(), str::to_string)
}

/// Words across section headings, paragraphs and bullets.
pub fn word_count(sections: &[Section]) -> usize {
    sections
        .iter()
        .flat_map(|s| {
            std::iter::once(&s.heading)
                .chain(&s.paragraphs)
                .chain(&s.bullets)
        })
        .map(|text| text.split_whitespace().count())
        .sum()
}

/// Post excerpt: the meta description when present, else the first paragraph cut
/// at a word boundary.
pub fn excerpt(meta_description: &str, sections: &[Section]) -> String {
    if !meta_description.trim().is_empty() {
        return meta_description.trim().to_string();
    }
    sections
        .iter()
        .find_map(|s| s.paragraphs.first())
        .map(|p| truncate_words(p, MAX_EXCERPT_CHARS))
        .unwrap_or_default()
}

fn truncate_words(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(' ') {
        Some(space) if space > 0 => &cut[..space],
        _ => cut.as_str(),
    };
    format!("{}...", trimmed.trim_end_matches([',', ';', ':', '.']))
}

/// Markdown rendering of sections, used as a post's `content`.
///
/// Headings keep their level; images and videos follow the text of their section.
pub fn sections_to_markdown(sections: &[Section]) -> String {
    sections_to_markdown_nested(sections, 0)
}

/// Like [`sections_to_markdown`], with every heading pushed `depth` levels down.
pub fn sections_to_markdown_nested(sections: &[Section], depth: u8) -> String {
    let mut blocks: Vec<String> = Vec::new();
    for section in sections {
        let level = usize::from(section.heading_level.saturating_add(depth)).min(6);
        let hashes = "#".repeat(level);
        blocks.push(format!("{hashes} {}", section.heading));
        blocks.extend(section.paragraphs.iter().cloned());
        if !section.bullets.is_empty() {
            blocks.push(
                section
                    .bullets
                    .iter()
                    .map(|b| format!("- {b}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
        for image in &section.images {
            blocks.push(format!("![{}]({})", image.alt_text, image.canonical_url));
        }
        for video in &section.videos {
            blocks.push(format!("[{}]({})", video.title, video.watch_url()));
        }
    }
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: &str, paragraphs: &[&str], bullets: &[&str]) -> Section {
        Section {
            heading: heading.to_string(),
            heading_level: 2,
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            images: Vec::new(),
            videos: Vec::new(),
        }
    }

    #[test]
    fn test_slug_from_url() {
        let slug = |u: &str| slug_from_url(&Url::parse(u).expect("url"));
        assert_eq!(slug("https://www.acme.com/"), "home");
        assert_eq!(slug("https://www.acme.com/roller-blinds/"), "roller-blinds");
        assert_eq!(slug("https://www.acme.com/blog/how-to-measure"), "how-to-measure");
    }

    #[test]
    fn test_word_count_covers_headings_paragraphs_bullets() {
        let sections = vec![section("Two Words", &["three more words"], &["one"])];
        assert_eq!(word_count(&sections), 6);
    }

    #[test]
    fn test_excerpt_prefers_meta_description() {
        let sections = vec![section("A", &["First paragraph of the post."], &[])];
        assert_eq!(excerpt("  A short summary. ", &sections), "A short summary.");
        assert_eq!(excerpt("", &sections), "First paragraph of the post.");
        assert_eq!(excerpt("", &[]), "");
    }

    #[test]
    fn test_excerpt_truncates_on_word_boundary() {
        let long = "word ".repeat(60);
        let sections = vec![section("A", &[long.trim()], &[])];
        let out = excerpt("", &sections);
        assert!(out.ends_with("word..."));
        assert!(out.chars().count() <= MAX_EXCERPT_CHARS + 3);
    }

    #[test]
    fn test_markdown_rendering() {
        let mut s = section("Fitting", &["We fit everything."], &["Free survey", "Free quote"]);
        s.heading_level = 3;
        assert_eq!(
            sections_to_markdown(&[s.clone()]),
            "### Fitting\n\nWe fit everything.\n\n- Free survey\n- Free quote"
        );
        assert!(sections_to_markdown_nested(&[s], 1).starts_with("#### Fitting"));
    }
}
