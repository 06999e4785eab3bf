//! HTML search-page source reader.
//!
//! Fetches a search-result page and extracts one [`RawEntry`] per article
//! card using the configured selectors. A card sub-element that matches
//! nothing becomes an absent field; a card whose href cannot be resolved is
//! skipped with a warning and never aborts the rest of the page.

use crate::error::IngestError;
use crate::scrapers::RawEntry;
use crate::sources::PageSelectors;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{info, instrument, warn};
use url::Url;

/// A single article card could not be turned into an entry.
#[derive(Debug, Error)]
#[error("could not resolve href `{href}`: {reason}")]
pub struct CardError {
    href: String,
    reason: url::ParseError,
}

struct CardSelectors {
    card: Selector,
    title: Selector,
    link: Selector,
    press: Selector,
    summary: Selector,
}

impl CardSelectors {
    fn compile(selectors: &PageSelectors) -> Result<Self, IngestError> {
        Ok(Self {
            card: parse_selector(&selectors.card)?,
            title: parse_selector(&selectors.title)?,
            link: parse_selector(&selectors.link)?,
            press: parse_selector(&selectors.press)?,
            summary: parse_selector(&selectors.summary)?,
        })
    }
}

fn parse_selector(s: &str) -> Result<Selector, IngestError> {
    Selector::parse(s).map_err(|_| IngestError::Selector(s.to_string()))
}

/// Fetch a search page and return its article cards in document order.
///
/// # Errors
///
/// [`IngestError::Http`] on network failure, [`IngestError::Status`] on a
/// non-2xx response, [`IngestError::Selector`] / [`IngestError::BaseUrl`]
/// when the source configuration itself is broken.
#[instrument(level = "info", skip(client, selectors))]
pub async fn fetch_cards(
    client: &Client,
    url: &str,
    base_url: &str,
    selectors: &PageSelectors,
) -> Result<Vec<RawEntry>, IngestError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status {
            url: url.to_string(),
            status,
        });
    }

    let html = response.text().await?;
    let entries = extract_cards(&html, selectors, base_url)?;
    info!(count = entries.len(), "Extracted article cards");
    Ok(entries)
}

/// Extract raw entries from already-fetched page HTML.
///
/// Split out from [`fetch_cards`] so tests can run against fixture markup
/// without a network.
pub fn extract_cards(
    html: &str,
    selectors: &PageSelectors,
    base_url: &str,
) -> Result<Vec<RawEntry>, IngestError> {
    let compiled = CardSelectors::compile(selectors)?;
    let base = Url::parse(base_url)?;
    let document = Html::parse_document(html);

    let mut entries = Vec::new();
    for card in document.select(&compiled.card) {
        match extract_card(card, &compiled, &base) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!(error = %e, "Skipping malformed article card");
            }
        }
    }
    Ok(entries)
}

fn extract_card(
    card: ElementRef,
    selectors: &CardSelectors,
    base: &Url,
) -> Result<RawEntry, CardError> {
    let link = match card
        .select(&selectors.link)
        .next()
        .and_then(|a| a.value().attr("href"))
    {
        Some(href) => Some(resolve_href(base, href).map_err(|reason| CardError {
            href: href.to_string(),
            reason,
        })?),
        None => None,
    };

    Ok(RawEntry {
        title: card.select(&selectors.title).next().map(text_of),
        link,
        summary: card.select(&selectors.summary).next().map(text_of),
        published: None,
        press: card.select(&selectors.press).next().map(text_of),
    })
}

/// Resolve an article href to an absolute URL.
///
/// Absolute hrefs pass through untouched; scheme-less ones (including the
/// `./articles/…` form Google News emits) are joined onto the site's base
/// origin.
pub fn resolve_href(base: &Url, href: &str) -> Result<String, url::ParseError> {
    match Url::parse(href) {
        Ok(absolute) => Ok(absolute.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(base.join(href)?.to_string()),
        Err(e) => Err(e),
    }
}

fn text_of(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
