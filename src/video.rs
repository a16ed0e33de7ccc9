//! YouTube video resolution.
//!
//! Three independent passes find video IDs and are unioned by ID, first seen wins:
//! 1. video widgets: the URL inside the widget's JSON `data-settings`
//! 2. iframes: `src` / `data-src` pointing at a YouTube embed host
//! 3. raw HTML: a regex sweep over the unparsed page, which also catches IDs that
//!    only appear in inline scripts
//!
//! Sections additionally claim page videos whose ID appears in one of their
//! paragraphs (see [`claim_by_paragraph`]). That association is coincidental text
//! matching, not document structure.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};
use serde_json::Value;

use crate::dom::{self, static_selector};
use crate::error_handling::{InfoType, ProcessingStats};
use crate::models::Video;

const ID: &str = r"([A-Za-z0-9_-]{11})";

static WATCH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"youtube\.com/watch\?(?:[^\s'\x22<>]*?&(?:amp;)?)?v={ID}"))
        .expect("watch pattern is valid")
});
static EMBED_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"youtube(?:-nocookie)?\.com/embed/{ID}")).expect("embed pattern is valid")
});
static SHORT_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"youtu\.be/{ID}")).expect("short pattern is valid"));

/// The two embed hosts an iframe may point at.
static IFRAME_EMBED: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(&format!(r"youtube\.com/embed/{ID}")).expect("embed host pattern is valid"),
        Regex::new(&format!(r"youtube-nocookie\.com/embed/{ID}"))
            .expect("nocookie host pattern is valid"),
    ]
});

static_selector!(
    VIDEO_WIDGET,
    ".elementor-widget-video[data-settings], [data-widget_type^='video'][data-settings]"
);
static_selector!(IFRAME, "iframe");

/// Settings keys that may carry the video URL.
const WIDGET_URL_FIELDS: [&str; 2] = ["youtube_url", "video_url"];

/// Extracts an 11-character YouTube ID from a URL, trying `watch?v=`, `/embed/`
/// and `youtu.be/` in that order.
pub fn youtube_id(url: &str) -> Option<String> {
    [&*WATCH_URL, &*EMBED_URL, &*SHORT_URL]
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Insertion-ordered set of videos keyed by platform ID.
#[derive(Debug, Default)]
pub struct VideoSet {
    seen: HashSet<String>,
    videos: Vec<Video>,
}

impl VideoSet {
    /// Adds `video` unless its ID is already present. Returns whether it was added.
    pub fn insert(&mut self, video: Video) -> bool {
        if self.seen.insert(video.platform_id.clone()) {
            self.videos.push(video);
            true
        } else {
            false
        }
    }

    pub fn extend(&mut self, videos: impl IntoIterator<Item = Video>) {
        for video in videos {
            self.insert(video);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn into_vec(self) -> Vec<Video> {
        self.videos
    }
}

/// Videos referenced by video widgets inside `scope`.
///
/// Unparseable settings are skipped; the other passes may still recover the ID.
pub fn from_widgets(scope: ElementRef<'_>, stats: &ProcessingStats) -> Vec<Video> {
    scope
        .select(&VIDEO_WIDGET)
        .filter_map(|widget| {
            let raw = widget.value().attr("data-settings")?;
            let settings: Value = match serde_json::from_str(raw) {
                Ok(v) => v,
                Err(e) => {
                    log::debug!("Skipping video widget with unreadable settings: {}", e);
                    stats.increment_info(InfoType::VideoWidgetSettingsUnreadable);
                    return None;
                }
            };
            let url = WIDGET_URL_FIELDS
                .iter()
                .find_map(|field| settings.get(*field).and_then(Value::as_str))?;
            youtube_id(url).map(|id| Video::youtube(&id, None))
        })
        .collect()
}

/// Videos embedded through iframes inside `scope`.
pub fn from_iframes(scope: ElementRef<'_>) -> Vec<Video> {
    scope
        .select(&IFRAME)
        .filter_map(|iframe| {
            let id = ["src", "data-src"]
                .iter()
                .filter_map(|name| dom::attr(iframe, name))
                .find_map(|src| {
                    IFRAME_EMBED
                        .iter()
                        .find_map(|re| re.captures(src))
                        .and_then(|c| c.get(1))
                        .map(|m| m.as_str().to_string())
                })?;
            Some(Video::youtube(&id, dom::attr(iframe, "title")))
        })
        .collect()
}

/// Every YouTube ID mentioned anywhere in the raw page text, in order of appearance.
pub fn from_raw_html(raw_html: &str) -> Vec<Video> {
    let mut found: Vec<(usize, String)> = [&*WATCH_URL, &*EMBED_URL, &*SHORT_URL]
        .iter()
        .flat_map(|re| {
            re.captures_iter(raw_html)
                .filter_map(|c| c.get(1))
                .map(|m| (m.start(), m.as_str().to_string()))
                .collect::<Vec<_>>()
        })
        .collect();
    found.sort_by_key(|(pos, _)| *pos);
    found
        .into_iter()
        .map(|(_, id)| Video::youtube(&id, None))
        .collect()
}

/// Videos harvested from a section subtree: widget and iframe passes only.
pub fn resolve_in(scope: ElementRef<'_>, stats: &ProcessingStats) -> Vec<Video> {
    let mut set = VideoSet::default();
    set.extend(from_widgets(scope, stats));
    set.extend(from_iframes(scope));
    set.into_vec()
}

/// Page-wide union of all three passes.
pub fn resolve_page(document: &Html, raw_html: &str, stats: &ProcessingStats) -> Vec<Video> {
    let root = document.root_element();
    let mut set = VideoSet::default();
    set.extend(from_widgets(root, stats));
    set.extend(from_iframes(root));
    set.extend(from_raw_html(raw_html));
    set.into_vec()
}

/// Page videos whose ID appears as a substring of any of `paragraphs`.
pub fn claim_by_paragraph<'v>(videos: &'v [Video], paragraphs: &[String]) -> Vec<&'v Video> {
    videos
        .iter()
        .filter(|v| paragraphs.iter().any(|p| p.contains(&v.platform_id)))
        .collect()
}
