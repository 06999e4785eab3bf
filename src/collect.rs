//! Item normalization and the sequential ingestion pipeline.
//!
//! [`ingest`] walks the configured sources one at a time, downgrades
//! unreachable sources to zero entries, caps each source's contribution, and
//! substitutes placeholders so every published field is present. The outcome
//! is an explicit [`IngestResult`]: a run that produced nothing yields
//! [`IngestResult::Empty`], which the caller must handle as "do not write".

use crate::error::IngestError;
use crate::models::{
    NewsItem, LINK_PLACEHOLDER, SUMMARY_PLACEHOLDER, TITLE_PLACEHOLDER,
};
use crate::scrapers::{feed, page, RawEntry};
use crate::sources::{Source, SourceKind};
use chrono::Local;
use reqwest::Client;
use tracing::{info, instrument, warn};

/// Aggregate outcome of one ingestion run.
///
/// The `Empty` variant is distinct from `Items(vec![])` on purpose: it can
/// only be produced when no source contributed anything, and it forces the
/// publisher's call site to take the skip-write branch explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestResult {
    /// At least one item was collected.
    Items(Vec<NewsItem>),
    /// No source contributed any item; the previous document stays in place.
    Empty,
}

/// Fetch and normalize every configured source, in order.
///
/// Fetch failures (network errors, non-2xx responses) downgrade the affected
/// source to zero entries and the run continues. Configuration faults and
/// malformed feed documents propagate and abort the run.
#[instrument(level = "info", skip_all, fields(sources = sources.len()))]
pub async fn ingest(client: &Client, sources: &[Source]) -> Result<IngestResult, IngestError> {
    let mut news = Vec::new();

    for source in sources {
        let fetched = match &source.kind {
            SourceKind::Feed => feed::fetch_entries(client, &source.url).await,
            SourceKind::Page {
                base_url,
                selectors,
            } => page::fetch_cards(client, &source.url, base_url, selectors).await,
        };

        let items = collect_source(source, fetched)?;
        info!(source = %source.name, count = items.len(), "Collected items");
        news.extend(items);
    }

    Ok(into_result(news))
}

/// Turn one source's fetch outcome into its contribution to the run.
///
/// A fetch failure downgrades the source to zero items; any other error
/// aborts the run. Split from [`ingest`] so the downgrade branch is testable
/// with fixture results instead of a live network.
pub fn collect_source(
    source: &Source,
    fetched: Result<Vec<RawEntry>, IngestError>,
) -> Result<Vec<NewsItem>, IngestError> {
    let entries = match fetched {
        Ok(entries) => entries,
        Err(e) if e.is_fetch_failure() => {
            warn!(source = %source.name, error = %e, "Source unreachable; it contributes no items");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let captured_at = match source.kind {
        SourceKind::Feed => None,
        SourceKind::Page { .. } => Some(Local::now().to_rfc3339()),
    };
    Ok(normalize(&source.name, entries, source.cap(), captured_at))
}

/// Turn one source's raw entries into schema-complete items, capped at `cap`.
///
/// `captured_at` is set for scraped sources, which have no upstream date:
/// every item from the page is stamped with the normalization instant. Feed
/// items carry the upstream date string verbatim, defaulting to an empty
/// string.
pub fn normalize(
    source_name: &str,
    entries: Vec<RawEntry>,
    cap: usize,
    captured_at: Option<String>,
) -> Vec<NewsItem> {
    entries
        .into_iter()
        .take(cap)
        .map(|entry| NewsItem {
            source: field_or(entry.press, source_name),
            title: field_or(entry.title, TITLE_PLACEHOLDER),
            link: field_or(entry.link, LINK_PLACEHOLDER),
            summary: field_or(entry.summary, SUMMARY_PLACEHOLDER),
            timestamp: match &captured_at {
                Some(instant) => instant.clone(),
                None => entry.published.unwrap_or_default(),
            },
        })
        .collect()
}

/// Classify the aggregate: zero items is the distinct "skip the write" signal.
pub fn into_result(news: Vec<NewsItem>) -> IngestResult {
    if news.is_empty() {
        IngestResult::Empty
    } else {
        IngestResult::Items(news)
    }
}

fn field_or(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize) -> RawEntry {
        RawEntry {
            title: Some(format!("Title {i}")),
            link: Some(format!("https://example.com/{i}")),
            summary: Some(format!("Summary {i}")),
            published: Some(format!("Mon, 0{i} Aug 2025 09:00:00 GMT")),
            press: None,
        }
    }

    #[test]
    fn test_missing_fields_become_placeholders() {
        let items = normalize("구글 뉴스", vec![RawEntry::default()], 5, None);
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.source, "구글 뉴스");
        assert_eq!(item.title, TITLE_PLACEHOLDER);
        assert_eq!(item.link, LINK_PLACEHOLDER);
        assert_eq!(item.summary, SUMMARY_PLACEHOLDER);
        assert_eq!(item.timestamp, "");
    }

    #[test]
    fn test_blank_fields_treated_as_missing() {
        let blank = RawEntry {
            title: Some("   ".to_string()),
            link: Some(String::new()),
            summary: Some("\n".to_string()),
            published: None,
            press: Some(String::new()),
        };
        let items = normalize("Electrek", vec![blank], 5, None);
        assert_eq!(items[0].title, TITLE_PLACEHOLDER);
        assert_eq!(items[0].link, LINK_PLACEHOLDER);
        assert_eq!(items[0].summary, SUMMARY_PLACEHOLDER);
        assert_eq!(items[0].source, "Electrek");
    }

    #[test]
    fn test_cap_retains_first_n_in_order() {
        let entries: Vec<_> = (1..=7).map(entry).collect();
        let items = normalize("Electrek", entries, 5, None);
        assert_eq!(items.len(), 5);
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Title 1", "Title 2", "Title 3", "Title 4", "Title 5"]
        );
        // Fields pass through verbatim.
        assert_eq!(items[2].timestamp, "Mon, 03 Aug 2025 09:00:00 GMT");
        assert_eq!(items[4].link, "https://example.com/5");
    }

    #[test]
    fn test_press_label_overrides_source_name() {
        let with_press = RawEntry {
            press: Some("연합뉴스".to_string()),
            ..entry(1)
        };
        let items = normalize("구글 뉴스 검색", vec![with_press], 10, None);
        assert_eq!(items[0].source, "연합뉴스");
    }

    #[test]
    fn test_capture_instant_stamps_scraped_items() {
        let instant = "2025-08-30T12:00:00+09:00".to_string();
        let items = normalize("구글 뉴스 검색", vec![entry(1), entry(2)], 10, Some(instant.clone()));
        assert!(items.iter().all(|i| i.timestamp == instant));
    }

    #[test]
    fn test_feed_timestamp_passes_through_unparsed() {
        let odd_date = RawEntry {
            published: Some("sometime last week".to_string()),
            ..entry(1)
        };
        let items = normalize("Electrek", vec![odd_date], 5, None);
        assert_eq!(items[0].timestamp, "sometime last week");
    }

    #[test]
    fn test_unreachable_source_downgrades_to_zero_items() {
        let source = Source::feed("Electrek", "https://electrek.co/feed/");
        let fetched = Err(IngestError::Status {
            url: source.url.clone(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        });
        let items = collect_source(&source, fetched).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_config_fault_aborts_the_run() {
        let source = Source::feed("Electrek", "https://electrek.co/feed/");
        let fetched = Err(IngestError::Selector("div..card".to_string()));
        assert!(collect_source(&source, fetched).is_err());
    }

    #[test]
    fn test_feed_source_contribution_is_capped_and_verbatim() {
        let source = Source::feed("Electrek", "https://electrek.co/feed/");
        let entries: Vec<_> = (1..=7).map(entry).collect();
        let items = collect_source(&source, Ok(entries)).unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].timestamp, "Mon, 01 Aug 2025 09:00:00 GMT");
        assert_eq!(items[0].source, "Electrek");
    }

    #[test]
    fn test_page_source_items_get_capture_instant() {
        let source = Source::page(
            "구글 뉴스 검색",
            "https://news.google.com/search?q=ev",
            "https://news.google.com",
            crate::sources::PageSelectors::google_news(),
        );
        let items = collect_source(&source, Ok(vec![entry(1)])).unwrap();
        // Scraped items are stamped at normalization time, not passed through.
        assert_ne!(items[0].timestamp, "Mon, 01 Aug 2025 09:00:00 GMT");
        assert!(items[0].timestamp.contains('T'));
    }

    #[test]
    fn test_empty_aggregate_is_the_skip_signal() {
        assert_eq!(into_result(Vec::new()), IngestResult::Empty);
    }

    #[test]
    fn test_nonempty_aggregate_keeps_items() {
        let items = normalize("Electrek", vec![entry(1)], 5, None);
        match into_result(items) {
            IngestResult::Items(news) => assert_eq!(news.len(), 1),
            IngestResult::Empty => panic!("one item must not collapse to Empty"),
        }
    }
}
