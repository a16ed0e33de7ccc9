// Extraction cascade tests.

use super::*;
use crate::config::ClassifierRules;

const SITE: &str = "https://www.acme.com/features/";

fn run(html: &str) -> (Extraction, ProcessingStats) {
    let classifier = Classifier::new(&ClassifierRules {
        asset_host: "www.acme.com".to_string(),
        ..ClassifierRules::default()
    });
    let base = Url::parse(SITE).expect("base url");
    let stats = ProcessingStats::new();
    let document = Html::parse_document(html);
    let extraction = {
        let ctx = ExtractContext {
            classifier: &classifier,
            base_url: &base,
            stats: &stats,
        };
        extract_sections(&document, &ctx)
    };
    (extraction, stats)
}

fn headings(extraction: &Extraction) -> Vec<&str> {
    extraction
        .sections
        .iter()
        .map(|s| s.heading.as_str())
        .collect()
}

const BUILDER_PAGE: &str = r#"<html><head><title>Features | Acme</title></head><body>
<div data-elementor-type="wp-page" class="elementor elementor-42">
  <section class="elementor-section elementor-top-section">
    <div class="elementor-widget elementor-widget-heading"><div class="elementor-widget-container">
      <h2 class="elementor-heading-title">Features</h2>
    </div></div>
    <div class="elementor-widget elementor-widget-text-editor"><div class="elementor-widget-container">
      <p>Our shutters are made to measure in our own workshop.</p>
      <p>Every order includes free fitting by our local team.</p>
      <ul><li>Solid hardwood frames</li><li>Hidden tilt rods</li><li>Lifetime warranty</li></ul>
    </div></div>
    <div class="elementor-widget elementor-widget-image">
      <img src="/wp-content/uploads/2023/05/shutters-768x512.jpg" alt="Plantation shutters">
    </div>
    <div class="elementor-widget elementor-widget-image">
      <img src="/wp-content/uploads/2023/01/acme-logo.png" alt="Acme">
    </div>
    <div class="elementor-widget elementor-widget-video">
      <iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ" title="Shutters in action"></iframe>
    </div>
  </section>
</div>
</body></html>"#;

#[test]
fn test_builder_page_yields_one_complete_section() {
    let (extraction, stats) = run(BUILDER_PAGE);
    assert_eq!(extraction.strategy, Some(InfoType::SectionBasedStrategy));
    assert_eq!(extraction.sections.len(), 1);

    let section = &extraction.sections[0];
    assert_eq!(section.heading, "Features");
    assert_eq!(section.heading_level, 2);
    assert_eq!(section.paragraphs.len(), 2);
    assert_eq!(section.bullets.len(), 3);
    assert_eq!(section.images.len(), 1);
    assert_eq!(
        section.images[0].canonical_url,
        "https://www.acme.com/wp-content/uploads/2023/05/shutters.jpg"
    );
    assert_eq!(section.images[0].section_context.as_deref(), Some("Features"));
    assert_eq!(section.videos.len(), 1);
    assert_eq!(section.videos[0].title, "Shutters in action");
    assert_eq!(stats.get_info_count(InfoType::SectionBasedStrategy), 1);
}

#[test]
fn test_plain_page_boundaries_keep_paragraphs_apart() {
    let html = r#"<html><body><main>
        <h2>A</h2><p>Paragraph belonging to A.</p>
        <h2>B</h2><p>Paragraph belonging to B.</p>
    </main></body></html>"#;
    let (extraction, _) = run(html);
    assert_eq!(extraction.strategy, Some(InfoType::DomWalkStrategy));
    assert_eq!(headings(&extraction), vec!["A", "B"]);
    assert_eq!(
        extraction.sections[0].paragraphs,
        vec!["Paragraph belonging to A."]
    );
    assert_eq!(
        extraction.sections[1].paragraphs,
        vec!["Paragraph belonging to B."]
    );
}

#[test]
fn test_empty_heading_is_discarded() {
    let html = r#"<html><body><main>
        <h2>Nothing Here</h2>
        <h3>Measuring</h3><p>Measure the recess at three points.</p>
    </main></body></html>"#;
    let (extraction, _) = run(html);
    assert_eq!(headings(&extraction), vec!["Measuring"]);
    assert_eq!(extraction.sections[0].heading_level, 3);
}

#[test]
fn test_excluded_heading_never_opens_a_section() {
    let html = r#"<html><body><main>
        <h2>Related Posts</h2><p>How to choose the right blinds for a bay window.</p>
    </main></body></html>"#;
    let (extraction, _) = run(html);
    assert!(extraction
        .sections
        .iter()
        .all(|s| !s.heading.eq_ignore_ascii_case("related posts")));
}

#[test]
fn test_h1_only_terminates() {
    let html = r#"<html><body><main>
        <h2>Intro</h2><p>This paragraph belongs to the intro.</p>
        <h1>Page Title</h1><p>This paragraph follows the page title.</p>
    </main></body></html>"#;
    let (extraction, _) = run(html);
    assert_eq!(headings(&extraction), vec!["Intro"]);
    assert_eq!(extraction.sections[0].paragraphs.len(), 1);
}

#[test]
fn test_nested_boundary_stops_the_scan() {
    let html = r#"<html><body><div class="entry-content">
        <h2>Blinds</h2><p>Roller, roman and venetian blinds.</p>
        <div class="wp-block-group"><h3>Shutters</h3><p>Full height and cafe style.</p></div>
    </div></body></html>"#;
    let (extraction, _) = run(html);
    assert_eq!(headings(&extraction), vec!["Blinds", "Shutters"]);
    assert_eq!(extraction.sections[0].paragraphs.len(), 1);
    assert_eq!(extraction.sections[1].paragraphs.len(), 1);
}

#[test]
fn test_dom_walk_lists_and_short_paragraphs() {
    let html = r#"<html><body><article>
        <h2>Options</h2>
        <p>Too short</p>
        <p>Choose from over forty colours.</p>
        <ul><li>White oak</li><li>White oak</li><li>Ash</li></ul>
    </article></body></html>"#;
    let (extraction, _) = run(html);
    let section = &extraction.sections[0];
    assert_eq!(section.paragraphs, vec!["Choose from over forty colours."]);
    // plain lists are unconditional, but the length floor still applies
    assert_eq!(section.bullets, vec!["White oak", "White oak"]);
}

#[test]
fn test_duplicate_images_collapse() {
    let html = r#"<html><body><main>
        <h2>Gallery</h2>
        <p><img src="/wp-content/uploads/2023/05/kitchen-300x200.jpg" alt="Kitchen"></p>
        <figure><img src="/wp-content/uploads/2023/05/kitchen-300x200.jpg"></figure>
        <figure><img src="https://www.acme.com/wp-content/uploads/badge-trust.png"></figure>
    </main></body></html>"#;
    let (extraction, _) = run(html);
    let images = &extraction.sections[0].images;
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].alt_text, "Kitchen");
    assert_eq!(
        images[0].original_url,
        "https://www.acme.com/wp-content/uploads/2023/05/kitchen-300x200.jpg"
    );
}

#[test]
fn test_widget_fallback_segments_text_editors() {
    let html = r#"<html><body><div class="elementor">
        <div class="elementor-widget-text-editor"><p>Family run since 1998 in Leeds.</p></div>
        <div class="elementor-widget-heading"><div><h2 class="elementor-heading-title">Our Story</h2></div></div>
        <div class="elementor-widget-text-editor">
            <div><p>We started with a single van and a tape measure.</p></div>
            <div><h3>Today</h3></div>
            <div><p>Twelve fitters cover the whole county.</p></div>
        </div>
    </div></body></html>"#;
    let (extraction, _) = run(html);
    assert_eq!(extraction.strategy, Some(InfoType::WidgetFallbackStrategy));
    assert_eq!(headings(&extraction), vec!["Overview", "Our Story", "Today"]);
    assert_eq!(
        extraction.sections[1].paragraphs,
        vec!["We started with a single van and a tape measure."]
    );
    assert_eq!(extraction.sections[2].heading_level, 3);
}

#[test]
fn test_widget_fallback_splits_bare_editor_text_on_headings() {
    let html = r#"<html><body><div class="elementor">
        <div class="elementor-widget-heading"><div><h2 class="elementor-heading-title">Our Story</h2></div></div>
        <div class="elementor-widget-text-editor"><div class="elementor-widget-container">
            We started with a single van.
            <h3>Today</h3>
            Twelve fitters cover the whole county.
        </div></div>
    </div></body></html>"#;
    let (extraction, _) = run(html);
    assert_eq!(extraction.strategy, Some(InfoType::WidgetFallbackStrategy));
    assert_eq!(headings(&extraction), vec!["Our Story", "Today"]);
    assert_eq!(
        extraction.sections[0].paragraphs,
        vec!["We started with a single van."]
    );
    assert_eq!(
        extraction.sections[1].paragraphs,
        vec!["Twelve fitters cover the whole county."]
    );
}

#[test]
fn test_icon_boxes_and_toggles_are_appended() {
    let html = r#"<html><body><div class="elementor">
      <section class="elementor-top-section">
        <div class="elementor-widget-heading"><h2 class="elementor-heading-title">Why Us</h2></div>
        <div class="elementor-widget-text-editor"><p>We have fitted blinds since 1998.</p></div>
        <div class="elementor-widget-icon-box">
          <h3 class="elementor-icon-box-title">Free Survey</h3>
          <p class="elementor-icon-box-description">We measure every window for free.</p>
        </div>
      </section>
      <div class="elementor-widget-accordion">
        <div class="elementor-accordion-item">
          <div class="elementor-tab-title">Do you fit?</div>
          <div class="elementor-tab-content">Yes, all fitting is included.</div>
        </div>
      </div>
    </div></body></html>"#;
    let (extraction, _) = run(html);
    assert_eq!(
        headings(&extraction),
        vec!["Why Us", "Free Survey", "Do you fit?"]
    );
    assert_eq!(extraction.sections[0].paragraphs.len(), 1);
    assert_eq!(
        extraction.sections[1].paragraphs,
        vec!["**Free Survey**: We measure every window for free."]
    );
    assert_eq!(
        extraction.sections[2].paragraphs,
        vec!["Yes, all fitting is included."]
    );
}

#[test]
fn test_widget_section_already_present_is_skipped() {
    let html = r#"<html><body>
      <main><h2>FAQ</h2><p>Yes, all fitting is included.</p></main>
      <footer><div class="elementor-toggle-item">
        <div class="elementor-tab-title">Do you fit?</div>
        <div class="elementor-tab-content">Yes, all fitting is included.</div>
      </div></footer>
    </body></html>"#;
    let (extraction, _) = run(html);
    assert_eq!(headings(&extraction), vec!["FAQ"]);
}

#[test]
fn test_nothing_extractable() {
    let (extraction, stats) = run("<html><body><div>hi</div></body></html>");
    assert!(extraction.sections.is_empty());
    assert_eq!(extraction.strategy, None);
    assert_eq!(stats.total_info(), 0);
}

#[test]
fn test_compose_icon_box() {
    assert_eq!(
        compose_icon_box(Some("Fast"), Some("Fitted in a week.")).as_deref(),
        Some("**Fast**: Fitted in a week.")
    );
    assert_eq!(
        compose_icon_box(None, Some("Fitted in a week.")).as_deref(),
        Some("Fitted in a week.")
    );
    let long_title = "x".repeat(81);
    assert_eq!(
        compose_icon_box(Some(&long_title), Some("Fitted in a week.")).as_deref(),
        Some("Fitted in a week.")
    );
    assert_eq!(compose_icon_box(Some("Fast"), None), None);
}
