//! Request header presets.
//!
//! The migration identifies itself honestly through its user agent (set on the
//! client); these headers only negotiate the content type for each kind of request.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};

pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Headers for page, post and listing requests.
    pub(crate) fn apply_html(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
    }

    /// Headers for image existence checks.
    pub(crate) fn apply_image(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header(ACCEPT, "image/avif,image/webp,image/*,*/*;q=0.8")
    }
}
