//! Generated TypeScript data module.
//!
//! Exports `pages`, `blogPosts` and `blogCategories` as typed constants so a site
//! generator can import the migrated content directly.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::MigrationReport;

const TYPE_DECLARATIONS: &str = r#"export interface Image {
  originalUrl: string;
  canonicalUrl: string;
  altText: string;
  sectionContext: string | null;
}

export interface Video {
  platformId: string;
  title: string;
  platform: "youtube";
  sectionContext: string | null;
}

export interface Section {
  heading: string;
  headingLevel: 2 | 3 | 4;
  paragraphs: string[];
  bullets: string[];
  images: Image[];
  videos: Video[];
}

export interface Page {
  url: string;
  slug: string;
  title: string;
  metaTitle: string;
  metaDescription: string;
  ogImage: string | null;
  sections: Section[];
  allImages: Image[];
  allVideos: Video[];
  wordCount: number;
}

export interface BlogPost extends Page {
  excerpt: string;
  content: string;
  featuredImage: string | null;
  date: string | null;
  category: string | null;
  author: string | null;
}
"#;

fn literal<T: Serialize + ?Sized>(name: &str, value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).with_context(|| format!("Failed to serialize {name}"))
}

/// Renders the data module source.
///
/// # Errors
///
/// Returns an error if any record fails to serialize.
pub fn render_data_module(report: &MigrationReport) -> Result<String> {
    let (posts, categories) = match &report.blog {
        Some(blog) => (blog.posts.as_slice(), blog.categories.as_slice()),
        None => (&[][..], &[][..]),
    };

    Ok(format!(
        "// Generated by site_migrate. Do not edit by hand.\n\n{}\n\
         export const pages: Page[] = {};\n\n\
         export const blogPosts: BlogPost[] = {};\n\n\
         export const blogCategories: string[] = {};\n",
        TYPE_DECLARATIONS,
        literal("pages", &report.pages)?,
        literal("blog posts", posts)?,
        literal("blog categories", categories)?,
    ))
}
