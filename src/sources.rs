//! Source descriptors and the built-in source set.
//!
//! Sources are plain data passed into the collector, not module-level
//! constants, so tests can substitute fixture descriptors without touching
//! the network. Page selectors are likewise configuration: they track an
//! unversioned third-party page layout and are expected to need updates
//! independently of the pipeline logic.

/// Items retained per feed source.
pub const FEED_ITEM_CAP: usize = 5;
/// Items retained per scraped page source.
pub const PAGE_ITEM_CAP: usize = 10;

/// CSS selectors used to pull article cards out of a search-result page.
///
/// `card` locates the repeating article element; the remaining selectors run
/// inside each card. A selector that matches nothing yields an absent field,
/// resolved to a placeholder by the normalizer.
#[derive(Debug, Clone)]
pub struct PageSelectors {
    /// Repeating article-card element.
    pub card: String,
    /// Headline element inside a card.
    pub title: String,
    /// Anchor element whose `href` is the article link.
    pub link: String,
    /// Press / outlet name element inside a card.
    pub press: String,
    /// Snippet element inside a card.
    pub summary: String,
}

impl PageSelectors {
    /// Selectors for the Google News search-result page layout.
    pub fn google_news() -> Self {
        Self {
            card: "div.pT6mwb".to_string(),
            title: "h3.ipQwMb".to_string(),
            link: "a.VDXfz".to_string(),
            press: "div.wEwyrc".to_string(),
            summary: "span.xBbh9".to_string(),
        }
    }
}

/// How a source's raw content is retrieved and interpreted.
#[derive(Debug, Clone)]
pub enum SourceKind {
    /// An RSS/Atom endpoint yielding structured entries.
    Feed,
    /// A web page scraped via structural element queries.
    Page {
        /// Origin used to resolve relative article hrefs.
        base_url: String,
        selectors: PageSelectors,
    },
}

/// A named place to fetch news from.
#[derive(Debug, Clone)]
pub struct Source {
    /// Display name, used as the `source` field for items without their own
    /// press label.
    pub name: String,
    pub url: String,
    pub kind: SourceKind,
}

impl Source {
    pub fn feed(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind: SourceKind::Feed,
        }
    }

    pub fn page(
        name: impl Into<String>,
        url: impl Into<String>,
        base_url: impl Into<String>,
        selectors: PageSelectors,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind: SourceKind::Page {
                base_url: base_url.into(),
                selectors,
            },
        }
    }

    /// Maximum number of items this source may contribute per run.
    pub fn cap(&self) -> usize {
        match self.kind {
            SourceKind::Feed => FEED_ITEM_CAP,
            SourceKind::Page { .. } => PAGE_ITEM_CAP,
        }
    }
}

/// The built-in EV motor news source set.
///
/// Google News search feeds (Korean and English) plus two EV outlet feeds,
/// and the Google News search page as the single scraped source.
pub fn default_sources() -> Vec<Source> {
    let query = urlencoding::encode("전기차 모터");
    vec![
        Source::feed(
            "구글 뉴스",
            format!("https://news.google.com/rss/search?q={query}&hl=ko&gl=KR&ceid=KR:ko"),
        ),
        Source::feed(
            "Google News",
            format!(
                "https://news.google.com/rss/search?q={}&hl=en-US&gl=US&ceid=US:en",
                urlencoding::encode("electric vehicle motor technology")
            ),
        ),
        Source::feed("Electrek", "https://electrek.co/feed/"),
        Source::feed("InsideEVs", "https://insideevs.com/rss/articles/all/"),
        Source::page(
            "구글 뉴스 검색",
            format!("https://news.google.com/search?q={query}&hl=ko&gl=KR&ceid=KR:ko"),
            "https://news.google.com",
            PageSelectors::google_news(),
        ),
    ]
}
