//! HTTP fetching.
//!
//! The only two suspension points of a run live here: HTML document fetches and
//! optional image existence checks. Both go through one shared `reqwest::Client`
//! built by [`crate::initialization::init_client`], which follows redirects and
//! carries the configured user agent and timeout.

mod request;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};

use crate::config::IMAGE_VERIFY_TIMEOUT;
use crate::error_handling::FetchError;

use request::RequestHeaders;

/// Fetches HTML documents and verifies image URLs.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
    verify_timeout: Duration,
}

impl HttpFetcher {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self {
            client,
            verify_timeout: IMAGE_VERIFY_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout used by [`Self::verify_image`].
    pub fn with_verify_timeout(mut self, timeout: Duration) -> Self {
        self.verify_timeout = timeout;
        self
    }

    /// GETs `url` and returns the body text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for any non-2xx final status (after redirects)
    /// and [`FetchError::Network`] when the request or body read fails.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("GET {}", url);
        let response = RequestHeaders::apply_html(self.client.get(url))
            .send()
            .await
            .map_err(|source| network(url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| network(url, source))
    }

    /// Checks that `url` resolves to a 2xx response.
    ///
    /// Sends `HEAD` first; servers that reject `HEAD` with 405 are retried with `GET`.
    /// Each request is bounded by the verify timeout.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the last request attempted.
    pub async fn verify_image(&self, url: &str) -> Result<(), FetchError> {
        let status = self.probe(Method::HEAD, url).await?;
        let status = if status == StatusCode::METHOD_NOT_ALLOWED {
            log::debug!("HEAD rejected for {}, retrying with GET", url);
            self.probe(Method::GET, url).await?
        } else {
            status
        };

        if status.is_success() {
            Ok(())
        } else {
            Err(FetchError::Status {
                url: url.to_string(),
                status,
            })
        }
    }

    async fn probe(&self, method: Method, url: &str) -> Result<StatusCode, FetchError> {
        RequestHeaders::apply_image(self.client.request(method, url))
            .timeout(self.verify_timeout)
            .send()
            .await
            .map(|response| response.status())
            .map_err(|source| network(url, source))
    }
}

fn network(url: &str, source: reqwest::Error) -> FetchError {
    FetchError::Network {
        url: url.to_string(),
        source,
    }
}
