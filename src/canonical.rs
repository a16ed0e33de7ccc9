//! Image URL canonicalization.
//!
//! The legacy media pipeline appended rendition suffixes (`-768x512`, `-400x300`,
//! duplicate markers like `-1`) to uploaded file names over the years. This module
//! maps any such rendition URL back to the URL of the original, full-resolution
//! upload. The mapping is pure, deterministic and idempotent, and only ever touches
//! the stem of the last path segment: host, extension, query and fragment are kept
//! byte for byte.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{LARGE_USER_DIMENSION, LARGE_WIDTH_SUFFIX, SMALL_USER_DIMENSION, SMALL_WIDTH_SUFFIX};

/// `-WIDTHxHEIGHT` at the end of a stem.
static DIMENSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\d+x\d+$").expect("dimension pattern is valid"));

/// A 1-2 digit duplicate marker, only when it directly follows a dimension suffix.
static DUPLICATE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\d+x\d+(-\d{1,2})$").expect("duplicate pattern is valid"));

/// Canonical URL for `url`, or `url` unchanged when it is not hosted on `asset_host`.
pub fn canonicalize(url: &str, asset_host: &str) -> String {
    if !is_on_host(url, asset_host) {
        return url.to_string();
    }

    // Split off query/fragment so they survive untouched.
    let tail_start = url.find(['?', '#']).unwrap_or(url.len());
    let (path_part, tail) = url.split_at(tail_start);

    let segment_start = path_part.rfind('/').map_or(0, |i| i + 1);
    let Some(dot) = path_part[segment_start..].rfind('.') else {
        return url.to_string();
    };
    let ext_start = segment_start + dot;
    let (prefix, stem) = path_part[..ext_start].split_at(segment_start);
    let extension = &path_part[ext_start..];

    let stem = canonical_stem(stem);
    format!("{prefix}{stem}{extension}{tail}")
}

/// Strips rendition suffixes right to left and applies the small→large upgrades.
fn canonical_stem(stem: &str) -> String {
    let mut stem = stem.to_string();
    let mut saw_small = false;

    loop {
        // Duplicate markers are checked first on every pass; the guard keeps
        // legitimate trailing numbers such as "Curtains-1" intact.
        if let Some(marker) = DUPLICATE_MARKER.captures(&stem).and_then(|c| c.get(1)) {
            stem.truncate(marker.start());
            continue;
        }
        if stem.ends_with(LARGE_USER_DIMENSION) {
            break;
        }
        if let Some(base) = stem.strip_suffix(SMALL_USER_DIMENSION) {
            saw_small = true;
            stem = base.to_string();
            continue;
        }
        if let Some(found) = DIMENSION_SUFFIX.find(&stem) {
            stem.truncate(found.start());
            continue;
        }
        break;
    }

    if saw_small && !stem.ends_with(LARGE_USER_DIMENSION) {
        stem.push_str(LARGE_USER_DIMENSION);
    }

    if let Some(base) = stem.strip_suffix(SMALL_WIDTH_SUFFIX) {
        if !base.is_empty() {
            stem = format!("{base}{LARGE_WIDTH_SUFFIX}");
        }
    }

    stem
}

fn is_on_host(url: &str, asset_host: &str) -> bool {
    if asset_host.is_empty() {
        return false;
    }
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .is_some_and(|host| host.eq_ignore_ascii_case(asset_host))
}
