//! Error types for API requests, record formatting, and content extraction.
//!
//! Every failure is surfaced to the caller; nothing is retried or swallowed
//! inside this crate. Errors are scoped to the single call that produced
//! them, so a failed fetch never poisons the client.

use thiserror::Error;

/// Errors produced by the archive/search client and the content fetcher.
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure reaching the remote service (DNS resolution,
    /// connection refused, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status. Carries the status
    /// and response body for diagnostics.
    #[error("API request failed with HTTP {status}: {body}")]
    RemoteRequest {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not valid JSON or lacked the expected
    /// `response.docs` path.
    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    /// An article record is missing a field the formatter requires.
    #[error("article record is missing required field `{field}`")]
    MalformedRecord { field: &'static str },

    /// Downloading an article page or extracting readable text from it failed.
    #[error("content fetch failed for {url}: {reason}")]
    ContentFetch { url: String, reason: String },

    /// A caller-supplied URL or API base could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
