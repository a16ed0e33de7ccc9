//! Error type definitions.
//!
//! This module defines the error enums returned by fallible operations, plus the
//! error, warning and info categories counted by [`super::ProcessingStats`].

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error reading or parsing a site profile.
    #[error("Profile load error: {0}")]
    ProfileError(String),
}

/// A page, post, listing or image request that did not produce a usable body.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The request never completed (DNS, connect, timeout, body read).
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: ReqwestError,
    },
}

impl FetchError {
    /// The URL the failed request targeted.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. } | FetchError::Network { url, .. } => url,
        }
    }
}

/// Extraction outcomes that prevent a record from being built.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// No `<h1>`, `og:title` or `<title>` text could be found for a blog post.
    #[error("No resolvable title for {url}")]
    MissingTitle { url: String },
}

/// Types of errors that can occur while processing a unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    HttpRequestNotFound,      // 404
    HttpRequestForbidden,     // 403
    HttpRequestServerError,   // 5xx
    HttpRequestOtherStatus,   // any other non-2xx
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestOtherError,
    TitleExtractError,
}

/// Types of warnings: the unit was processed but something optional was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    EmptyExtraction,
    MissingMetaDescription,
    BrokenImage,
}

/// Informational events worth counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    SectionBasedStrategy,
    DomWalkStrategy,
    WidgetFallbackStrategy,
    VideoWidgetSettingsUnreadable,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestForbidden => "Forbidden (403)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
            ErrorType::HttpRequestOtherStatus => "Other HTTP status",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::TitleExtractError => "Title extract error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::EmptyExtraction => "No admissible sections",
            WarningType::MissingMetaDescription => "Missing meta description",
            WarningType::BrokenImage => "Broken image link",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::SectionBasedStrategy => "Sections from builder sections",
            InfoType::DomWalkStrategy => "Sections from DOM walk",
            InfoType::WidgetFallbackStrategy => "Sections from widget fallback",
            InfoType::VideoWidgetSettingsUnreadable => "Unreadable video widget settings",
        }
    }
}
