//! RSS feed source reader.
//!
//! Fetches a syndication endpoint and maps its items into [`RawEntry`]
//! values. A well-formed feed with zero items yields an empty vector; only
//! transport failures and malformed XML are errors.

use crate::error::IngestError;
use crate::scrapers::RawEntry;
use reqwest::Client;
use rss::Channel;
use tracing::{debug, info, instrument};

/// Fetch a feed URL and return its entries in document order.
///
/// # Errors
///
/// [`IngestError::Http`] / [`IngestError::Status`] when the endpoint is
/// unreachable or answers non-2xx, [`IngestError::Feed`] when the body is
/// not parseable RSS.
#[instrument(level = "info", skip(client))]
pub async fn fetch_entries(client: &Client, url: &str) -> Result<Vec<RawEntry>, IngestError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await?;
    let channel = Channel::read_from(&body[..])?;
    let entries = entries_from_channel(&channel);
    info!(count = entries.len(), "Fetched feed entries");
    debug!(feed_title = %channel.title(), "Parsed feed");
    Ok(entries)
}

/// Map a parsed channel into raw entries, preserving item order.
pub fn entries_from_channel(channel: &Channel) -> Vec<RawEntry> {
    channel
        .items()
        .iter()
        .map(|item| RawEntry {
            title: item.title().map(str::to_string),
            link: item.link().map(str::to_string),
            summary: item.description().map(str::to_string),
            published: item.pub_date().map(str::to_string),
            press: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn electrek_feed(entry_count: usize) -> String {
        let mut items = String::new();
        for i in 1..=entry_count {
            items.push_str(&format!(
                "<item>\
                 <title>Motor story {i}</title>\
                 <link>https://electrek.co/story-{i}</link>\
                 <description>Summary {i}</description>\
                 <pubDate>Mon, 0{i} Aug 2025 09:00:00 GMT</pubDate>\
                 </item>"
            ));
        }
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <rss version=\"2.0\"><channel>\
             <title>Electrek</title>\
             <link>https://electrek.co</link>\
             <description>EV news</description>\
             {items}\
             </channel></rss>"
        )
    }

    #[test]
    fn test_entries_preserve_order_and_fields() {
        let xml = electrek_feed(7);
        let channel = Channel::read_from(xml.as_bytes()).unwrap();
        let entries = entries_from_channel(&channel);

        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].title.as_deref(), Some("Motor story 1"));
        assert_eq!(
            entries[6].link.as_deref(),
            Some("https://electrek.co/story-7")
        );
        assert_eq!(
            entries[2].published.as_deref(),
            Some("Mon, 03 Aug 2025 09:00:00 GMT")
        );
        assert_eq!(entries[4].summary.as_deref(), Some("Summary 5"));
        assert!(entries.iter().all(|e| e.press.is_none()));
    }

    #[test]
    fn test_empty_feed_yields_empty_sequence() {
        let xml = electrek_feed(0);
        let channel = Channel::read_from(xml.as_bytes()).unwrap();
        assert!(entries_from_channel(&channel).is_empty());
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let xml = "<?xml version=\"1.0\"?><rss version=\"2.0\"><channel>\
                   <title>t</title><link>l</link><description>d</description>\
                   <item><title>Only a title</title></item>\
                   </channel></rss>";
        let channel = Channel::read_from(xml.as_bytes()).unwrap();
        let entries = entries_from_channel(&channel);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title.as_deref(), Some("Only a title"));
        assert!(entries[0].link.is_none());
        assert!(entries[0].summary.is_none());
        assert!(entries[0].published.is_none());
    }

    #[test]
    fn test_malformed_feed_is_an_error() {
        assert!(Channel::read_from(&b"this is not xml"[..]).is_err());
    }
}
