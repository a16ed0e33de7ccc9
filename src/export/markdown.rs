//! Human-readable Markdown document.

use std::fmt::Write;

use crate::assemble::sections_to_markdown_nested;
use crate::models::{BlogPost, Page};
use crate::MigrationReport;

/// One document covering every page, then every blog post.
pub fn render_markdown(report: &MigrationReport) -> String {
    let mut out = String::from("# Migrated Content\n");

    for page in &report.pages {
        out.push('\n');
        write_page(&mut out, page, 1);
    }

    if let Some(blog) = &report.blog {
        let _ = write!(out, "\n# Blog ({} posts)\n", blog.total_posts);
        if !blog.categories.is_empty() {
            let _ = writeln!(out, "\nCategories: {}", blog.categories.join(", "));
        }
        for post in &blog.posts {
            out.push('\n');
            write_post(&mut out, post);
        }
    }

    if !report.broken_images.is_empty() {
        out.push_str("\n# Broken Images\n\n");
        for broken in &report.broken_images {
            let _ = writeln!(
                out,
                "- {} on {} ({})",
                broken.image_url, broken.page_url, broken.reason
            );
        }
    }

    out
}

fn write_page(out: &mut String, page: &Page, depth: u8) {
    let _ = writeln!(out, "{} {}\n", "#".repeat(usize::from(depth) + 1), page.title);
    let _ = writeln!(out, "- URL: {}", page.url);
    let _ = writeln!(out, "- Slug: {}", page.slug);
    if !page.meta_description.is_empty() {
        let _ = writeln!(out, "- Description: {}", page.meta_description);
    }
    let _ = writeln!(
        out,
        "- Words: {}, images: {}, videos: {}",
        page.word_count,
        page.all_images.len(),
        page.all_videos.len()
    );
    if !page.sections.is_empty() {
        let _ = writeln!(out, "\n{}", sections_to_markdown_nested(&page.sections, depth));
    }
}

fn write_post(out: &mut String, post: &BlogPost) {
    write_page(out, &post.page, 1);
    let details = [
        ("Date", post.date.as_deref()),
        ("Category", post.category.as_deref()),
        ("Author", post.author.as_deref()),
        ("Featured image", post.featured_image.as_deref()),
    ];
    for (label, value) in details {
        if let Some(value) = value {
            let _ = writeln!(out, "- {}: {}", label, value);
        }
    }
    if !post.excerpt.is_empty() {
        let _ = writeln!(out, "\n> {}", post.excerpt);
    }
}
