//! Error taxonomy for the ingestion pipeline.
//!
//! Fetch-level failures (`Http`, `Status`) are recovered at the collection
//! loop: the affected source simply contributes zero items. Everything else
//! is unexpected and propagates to `main`, which aborts the run before any
//! output write happens.

use thiserror::Error;

/// Errors surfaced by the source readers and the publisher.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Network-level failure reaching a source.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A source answered with a non-success status code.
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The fetched feed body is not a parseable RSS document.
    #[error("failed to parse feed: {0}")]
    Feed(#[from] rss::Error),

    /// A configured CSS selector string is not valid.
    #[error("invalid selector `{0}`")]
    Selector(String),

    /// A configured base URL is not a valid absolute URL.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Serializing the published document failed.
    #[error("failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// True for failures that should downgrade a source to "no entries"
    /// instead of aborting the whole run.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, IngestError::Http(_) | IngestError::Status { .. })
    }
}
