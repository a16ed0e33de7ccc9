// Assembler tests.

use super::*;
use crate::config::ClassifierRules;
use crate::error_handling::InfoType;

fn classifier() -> Classifier {
    Classifier::new(&ClassifierRules {
        asset_host: "www.acme.com".to_string(),
        ..ClassifierRules::default()
    })
}

fn url(s: &str) -> Url {
    Url::parse(s).expect("test url")
}

const FEATURES_PAGE: &str = r#"<!DOCTYPE html>
<html><head>
  <title>Features | Acme Blinds</title>
  <meta name="description" content="Made to measure shutters and blinds.">
  <meta property="og:image" content="/wp-content/uploads/2023/05/og-card.jpg">
</head><body>
<header><img src="/wp-content/uploads/2023/01/acme-logo.png" alt="Acme"></header>
<main>
<div data-elementor-type="wp-page" class="elementor elementor-7">
  <section class="elementor-section elementor-top-section">
    <div class="elementor-widget-heading"><h2 class="elementor-heading-title">Features</h2></div>
    <div class="elementor-widget-text-editor">
      <p>Our shutters are made to measure in our own workshop.</p>
      <p>Every order includes free fitting by our local team.</p>
      <ul><li>Solid hardwood frames</li><li>Hidden tilt rods</li><li>Lifetime warranty</li></ul>
    </div>
    <div class="elementor-widget-image">
      <img src="/wp-content/uploads/2023/05/shutters-768x512.jpg" alt="Plantation shutters">
      <img src="/wp-content/uploads/2023/05/shutters-768x512.jpg" alt="Duplicate">
      <img src="/wp-content/uploads/2023/01/facebook-icon.png" alt="">
    </div>
    <div class="elementor-widget-video">
      <iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ"></iframe>
    </div>
  </section>
</div>
</main>
<script>window.player = "https://www.youtube.com/embed/dQw4w9WgXcQ";</script>
</body></html>"#;

#[test]
fn test_end_to_end_builder_page() {
    let classifier = classifier();
    let stats = ProcessingStats::new();
    let assembler = Assembler::new(&classifier, &stats);

    let page = assembler.page(&url("https://www.acme.com/features/"), FEATURES_PAGE);

    assert_eq!(page.sections.len(), 1);
    assert_eq!(page.sections[0].paragraphs.len(), 2);
    assert_eq!(page.sections[0].bullets.len(), 3);
    assert_eq!(page.all_images.len(), 1);
    assert_eq!(page.all_videos.len(), 1);

    assert_eq!(page.slug, "features");
    assert_eq!(page.title, "Features | Acme Blinds");
    assert_eq!(page.meta_title, "Features | Acme Blinds");
    assert_eq!(page.meta_description, "Made to measure shutters and blinds.");
    assert_eq!(
        page.og_image.as_deref(),
        Some("https://www.acme.com/wp-content/uploads/2023/05/og-card.jpg")
    );
    assert_eq!(page.all_videos[0].section_context.as_deref(), Some("Features"));
    // 1 heading word + 19 paragraph words + 8 bullet words
    assert_eq!(page.word_count, 28);
    assert_eq!(stats.get_info_count(InfoType::SectionBasedStrategy), 1);
}

#[test]
fn test_page_without_sections_is_still_emitted() {
    let classifier = classifier();
    let stats = ProcessingStats::new();
    let assembler = Assembler::new(&classifier, &stats);

    let page = assembler.page(
        &url("https://www.acme.com/"),
        "<html><head><title>Home</title></head><body><div>Welcome</div></body></html>",
    );

    assert!(page.sections.is_empty());
    assert_eq!(page.slug, "home");
    assert_eq!(page.word_count, 0);
    assert_eq!(stats.get_warning_count(WarningType::EmptyExtraction), 1);
    assert_eq!(stats.get_warning_count(WarningType::MissingMetaDescription), 1);
}

#[test]
fn test_images_outside_sections_are_collected_after_section_images() {
    let classifier = classifier();
    let stats = ProcessingStats::new();
    let html = r#"<html><body><div class="entry-content">
        <figure><img src="/wp-content/uploads/2023/02/hero.jpg" alt="Hero"></figure>
        <h2>Roller Blinds</h2>
        <p>Blackout and dim-out fabrics in every colour.</p>
        <img src="/wp-content/uploads/2023/02/roller-300x200.jpg" alt="Roller">
    </div></body></html>"#;

    let page = Assembler::new(&classifier, &stats).page(&url("https://www.acme.com/roller/"), html);

    let originals: Vec<_> = page.all_images.iter().map(|i| i.original_url.as_str()).collect();
    assert_eq!(
        originals,
        vec![
            "https://www.acme.com/wp-content/uploads/2023/02/roller-300x200.jpg",
            "https://www.acme.com/wp-content/uploads/2023/02/hero.jpg",
        ]
    );
    assert_eq!(page.all_images[0].section_context.as_deref(), Some("Roller Blinds"));
    assert_eq!(page.all_images[1].section_context, None);
    assert_eq!(
        page.all_images[0].canonical_url,
        "https://www.acme.com/wp-content/uploads/2023/02/roller.jpg"
    );
}

#[test]
fn test_section_claims_video_mentioned_in_paragraph() {
    let classifier = classifier();
    let stats = ProcessingStats::new();
    let html = r#"<html><body><main>
        <h2>Watch Us Work</h2>
        <p>See the fitting video at https://youtu.be/abcDEF12345 for details.</p>
    </main></body></html>"#;

    let page = Assembler::new(&classifier, &stats).page(&url("https://www.acme.com/work/"), html);

    assert_eq!(page.all_videos.len(), 1);
    assert_eq!(page.sections[0].videos.len(), 1);
    assert_eq!(page.sections[0].videos[0].platform_id, "abcDEF12345");
    assert_eq!(
        page.sections[0].videos[0].section_context.as_deref(),
        Some("Watch Us Work")
    );
}

const POST: &str = r#"<html><head>
  <title>How to Measure for Blinds | Acme</title>
  <meta property="article:published_time" content="2023-05-04T09:30:00+01:00">
  <meta property="article:section" content="Guides">
</head><body>
<article>
  <h1>How to Measure for Blinds</h1>
  <span class="byline"><a rel="author" href="/author/sam/">Sam Patel</a></span>
  <div class="entry-content">
    <h2>Recess or Exact</h2>
    <p>Decide first whether the blind will hang inside the recess.</p>
    <img src="/wp-content/uploads/2023/05/measuring-400x300.jpg" alt="Tape measure">
  </div>
</article>
</body></html>"#;

#[test]
fn test_post_fields() {
    let classifier = classifier();
    let stats = ProcessingStats::new();
    let post = Assembler::new(&classifier, &stats)
        .post(&url("https://www.acme.com/blog/how-to-measure/"), POST)
        .expect("post should assemble");

    assert_eq!(post.page.title, "How to Measure for Blinds");
    assert_eq!(post.page.slug, "how-to-measure");
    assert_eq!(post.date.as_deref(), Some("2023-05-04"));
    assert_eq!(post.category.as_deref(), Some("Guides"));
    assert_eq!(post.author.as_deref(), Some("Sam Patel"));
    assert_eq!(
        post.excerpt,
        "Decide first whether the blind will hang inside the recess."
    );
    assert_eq!(
        post.featured_image.as_deref(),
        Some("https://www.acme.com/wp-content/uploads/2023/05/measuring-1200x900.jpg")
    );
    assert!(post.content.starts_with("## Recess or Exact\n\nDecide first"));
}

#[test]
fn test_post_without_title_is_rejected() {
    let classifier = classifier();
    let stats = ProcessingStats::new();
    let target = url("https://www.acme.com/blog/untitled/");
    let result = Assembler::new(&classifier, &stats).post(
        &target,
        "<html><body><main><h2>Body</h2><p>Some body text here.</p></main></body></html>",
    );

    assert_eq!(
        result.unwrap_err(),
        ExtractError::MissingTitle {
            url: target.to_string()
        }
    );
}

#[test]
fn test_normalize_date_layouts() {
    assert_eq!(normalize_date("2023-05-04").as_deref(), Some("2023-05-04"));
    assert_eq!(normalize_date("2023-05-04T10:00:00").as_deref(), Some("2023-05-04"));
    assert_eq!(normalize_date("May 4, 2023").as_deref(), Some("2023-05-04"));
    assert_eq!(normalize_date("4 May 2023").as_deref(), Some("2023-05-04"));
    assert_eq!(normalize_date("last spring"), None);
}
