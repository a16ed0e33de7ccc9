//! Output records.
//!
//! Every record is a fresh value built bottom-up for one extraction run and handed,
//! unmodified, to the serializers in `export`. Field names serialize in camelCase.

use serde::Serialize;

/// An image found on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub original_url: String,
    /// Always `canonicalize(original_url)`.
    pub canonical_url: String,
    pub alt_text: String,
    /// Heading of the section the image was found in, if any.
    pub section_context: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    YouTube,
}

/// An embedded video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// 11-character YouTube ID.
    pub platform_id: String,
    pub title: String,
    pub platform: VideoPlatform,
    pub section_context: Option<String>,
}

impl Video {
    pub fn youtube(id: &str, title: Option<&str>) -> Self {
        Self {
            platform_id: id.to_string(),
            title: title
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map_or_else(|| format!("YouTube video {id}"), str::to_string),
            platform: VideoPlatform::YouTube,
            section_context: None,
        }
    }

    pub fn watch_url(&self) -> String {
        match self.platform {
            VideoPlatform::YouTube => {
                format!("https://www.youtube.com/watch?v={}", self.platform_id)
            }
        }
    }

    /// Copy tagged with the heading of the section that owns it.
    pub fn in_section(&self, heading: &str) -> Self {
        Self {
            section_context: Some(heading.to_string()),
            ..self.clone()
        }
    }
}

/// One heading-delimited block of page content.
///
/// Never retained with empty `paragraphs`, `bullets` and `images`; `heading_level`
/// is 2, 3 or 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub heading: String,
    pub heading_level: u8,
    pub paragraphs: Vec<String>,
    pub bullets: Vec<String>,
    pub images: Vec<Image>,
    pub videos: Vec<Video>,
}

impl Section {
    pub fn has_content(&self) -> bool {
        !self.paragraphs.is_empty() || !self.bullets.is_empty() || !self.images.is_empty()
    }
}

/// An extracted page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub url: String,
    pub slug: String,
    pub title: String,
    pub meta_title: String,
    pub meta_description: String,
    pub og_image: Option<String>,
    pub sections: Vec<Section>,
    /// Every content image on the page; section lists hold context-tagged copies.
    pub all_images: Vec<Image>,
    /// Every video on the page; section lists hold context-tagged copies.
    pub all_videos: Vec<Video>,
    pub word_count: usize,
}

/// An extracted blog post: the page shape plus post metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(flatten)]
    pub page: Page,
    pub excerpt: String,
    /// Markdown rendering of `page.sections`.
    pub content: String,
    pub featured_image: Option<String>,
    /// `YYYY-MM-DD` when parseable, otherwise the raw date text.
    pub date: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
}

/// Output of blog mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCrawlResult {
    pub posts: Vec<BlogPost>,
    /// Unique categories in first-seen order.
    pub categories: Vec<String>,
    pub total_posts: usize,
}

impl BlogCrawlResult {
    pub fn from_posts(posts: Vec<BlogPost>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for category in posts.iter().filter_map(|p| p.category.as_deref()) {
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        Self {
            total_posts: posts.len(),
            posts,
            categories,
        }
    }
}

/// A content image whose URL did not resolve during verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokenImage {
    pub page_url: String,
    pub image_url: String,
    pub reason: String,
}
