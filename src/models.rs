//! Data models for collected news items and the published document.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsItem`]: A normalized news record with every field guaranteed present
//! - [`PublishedDocument`]: The single JSON document written per run
//! - Chart types: [`MarketGraphs`], [`ChartDataset`]
//!
//! The placeholder constants document the fixed strings substituted for
//! missing fields so the output schema never contains nulls.

use serde::{Deserialize, Serialize};

/// Substituted when an entry carries no usable title.
pub const TITLE_PLACEHOLDER: &str = "제목 없음";
/// Substituted when an entry carries no usable link.
pub const LINK_PLACEHOLDER: &str = "#";
/// Substituted when an entry carries no usable summary.
pub const SUMMARY_PLACEHOLDER: &str = "요약 없음";

/// A single normalized news record.
///
/// Every field is always a non-null string: the normalizer replaces missing
/// or empty values with the documented placeholder constants rather than
/// omitting the field.
///
/// # Fields
///
/// * `source` - Name of the origin feed or site
/// * `title` - Headline, or [`TITLE_PLACEHOLDER`]
/// * `link` - Absolute article URL, or [`LINK_PLACEHOLDER`]
/// * `summary` - Short description, or [`SUMMARY_PLACEHOLDER`]
/// * `timestamp` - Upstream publication date passed through verbatim for
///   feed items (empty string when the feed provides none), or the RFC 3339
///   capture instant for scraped items
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewsItem {
    /// Name of the origin feed or site.
    pub source: String,
    /// The article headline.
    pub title: String,
    /// Absolute URL of the article.
    pub link: String,
    /// Short description of the article.
    pub summary: String,
    /// Publication date or capture instant.
    pub timestamp: String,
}

/// The complete document written to the output file each run.
///
/// One `PublishedDocument` is produced per successful run and fully replaces
/// the previous file. A run that collects zero items never constructs one,
/// which is what keeps the prior file authoritative across source outages.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PublishedDocument {
    /// RFC 3339 instant at which this document was assembled.
    pub last_updated: String,
    /// Collected items in source-iteration order, then arrival order.
    pub news: Vec<NewsItem>,
    /// Static market chart datasets; omitted from the JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphs: Option<MarketGraphs>,
}

/// One named chart dataset: parallel label/value vectors for a bar or pie chart.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    /// Attribution for the figures, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The fixed set of market-share charts shipped alongside the news list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MarketGraphs {
    pub yearly_market_size: ChartDataset,
    pub country_market_share: ChartDataset,
    pub company_market_share: ChartDataset,
}
