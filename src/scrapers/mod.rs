//! Source readers for fetching raw news entries.
//!
//! Each reader performs a single GET (no retries, no backoff) and maps the
//! response into a list of [`RawEntry`] values for the normalizer. Every
//! field of a raw entry is optional; deciding what a missing field becomes
//! is the normalizer's job, not the reader's.
//!
//! # Sources
//!
//! | Kind | Module | Method | Notes |
//! |------|--------|--------|-------|
//! | Feed | [`feed`] | RSS parsing | Zero entries is a valid result, not an error |
//! | Page | [`page`] | HTML scraping | Card selectors are configuration, see `sources` |

pub mod feed;
pub mod page;

/// Browser-like user agent sent with every request. Some news hosts refuse
/// requests with the default library agent.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0 Safari/537.36";

/// A raw entry as extracted from a feed item or an article card, before
/// placeholder substitution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntry {
    pub title: Option<String>,
    /// Absolute article URL; page readers resolve relative hrefs before
    /// handing entries over.
    pub link: Option<String>,
    pub summary: Option<String>,
    /// Upstream publication date string, verbatim. Only feeds provide one.
    pub published: Option<String>,
    /// Press / outlet label carried by the entry itself, when present.
    pub press: Option<String>,
}
