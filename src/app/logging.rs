//! Progress logging utilities.

use log::info;

use crate::models::Page;

/// Logs the start of unit `index` (1-based) out of `total`.
pub fn log_progress(kind: &str, index: usize, total: usize, url: &str) {
    info!("[{}/{}] Extracting {} {}", index, total, kind, url);
}

/// Logs what was extracted from one page or post.
pub fn log_page_extracted(page: &Page) {
    let bullets: usize = page.sections.iter().map(|s| s.bullets.len()).sum();
    info!(
        "'{}': {} section{}, {} bullet{}, {} image{}, {} video{}, {} words",
        page.title,
        page.sections.len(),
        plural(page.sections.len()),
        bullets,
        plural(bullets),
        page.all_images.len(),
        plural(page.all_images.len()),
        page.all_videos.len(),
        plural(page.all_videos.len()),
        page.word_count
    );
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0), "s");
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
    }
}
