// Shared test helpers: a small page-builder site served by wiremock.
//
// Used by the integration test files through `mod helpers;`.

use std::path::PathBuf;

use site_migrate::{Config, LogFormat, LogLevel, Mode};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a quiet test config pointing at `site_url` and writing into `output_dir`.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(site_url: &str, mode: Mode, output_dir: PathBuf) -> Config {
    Config {
        mode,
        site_url: site_url.to_string(),
        output_dir,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        timeout_seconds: 5,
        user_agent: "site_migrate_test/1.0".to_string(),
        ..Default::default()
    }
}

/// Home page with one builder section holding text, a list, an image and a video.
#[allow(dead_code)]
pub fn home_page_html() -> String {
    r#"<!DOCTYPE html>
<html><head>
  <title>Acme Blinds | Made to Measure</title>
  <meta name="description" content="Made-to-measure blinds fitted by our own team.">
</head><body>
  <header><img src="/wp-content/uploads/acme-logo.png" alt="Acme"></header>
  <div data-elementor-type="wp-page" class="elementor">
    <section class="elementor-top-section">
      <div class="elementor-widget-heading"><h2 class="elementor-heading-title">Roller Blinds</h2></div>
      <div class="elementor-widget-text-editor">
        <p>Our roller blinds are cut to size in our own workshop.</p>
        <p>Every blind comes with a five year guarantee.</p>
      </div>
      <ul class="elementor-icon-list-items">
        <li class="elementor-icon-list-item"><span class="elementor-icon-list-text">Free home survey</span></li>
        <li class="elementor-icon-list-item"><span class="elementor-icon-list-text">Blackout fabrics</span></li>
      </ul>
      <img src="/wp-content/uploads/2024/05/kitchen-768x512.jpg" alt="Kitchen roller blind">
      <div class="elementor-widget-video" data-settings='{"youtube_url":"https://www.youtube.com/watch?v=dQw4w9WgXcQ"}'></div>
    </section>
  </div>
</body></html>"#
        .to_string()
}

/// Blog listing page linking to `posts`, with or without a next-page control.
#[allow(dead_code)]
pub fn listing_html(posts: &[&str], has_next: bool) -> String {
    let articles: String = posts
        .iter()
        .map(|slug| {
            format!(
                r#"<article class="elementor-post">
  <h3 class="elementor-post__title"><a href="/blog/{slug}/">{slug}</a></h3>
  <a class="elementor-post__read-more" href="/blog/{slug}/">Read More »</a>
</article>"#
            )
        })
        .collect();
    let next = if has_next {
        r##"<nav class="elementor-pagination"><a class="next" href="#">Next</a></nav>"##
    } else {
        ""
    };
    format!(
        r#"<html><body><div class="elementor-posts-container">{articles}</div>{next}</body></html>"#
    )
}

/// A blog post with title, date, category and one section.
#[allow(dead_code)]
pub fn post_html(title: &str, category: &str) -> String {
    format!(
        r#"<html><head>
  <meta property="article:published_time" content="2024-03-05T09:30:00+00:00">
</head><body>
  <article>
    <h1>{title}</h1>
    <span class="elementor-post-info__terms-list-item">{category}</span>
    <div class="entry-content">
      <h2>Getting Started</h2>
      <p>Measure the recess in three places and use the smallest width.</p>
    </div>
  </article>
</body></html>"#
    )
}

/// Mounts a `GET` returning `body` at `route`, expected exactly `times` times.
#[allow(dead_code)]
pub async fn mount_html(server: &MockServer, route: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}
