//! JSON publisher for the collected news document.
//!
//! Writes the document pretty-printed, UTF-8, with non-ASCII text emitted
//! literally (serde_json's default), and replaces the output path atomically:
//! the serialized bytes go to a sibling temp file first, then a rename swaps
//! it in. A fault anywhere earlier in the run therefore never damages the
//! previously published file.

use crate::collect::IngestResult;
use crate::error::IngestError;
use crate::models::{MarketGraphs, PublishedDocument};
use chrono::Local;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Publish an ingestion outcome to `output_path`.
///
/// `Items` becomes a fresh [`PublishedDocument`] stamped with the current
/// instant and replaces the file; `Empty` writes nothing at all, leaving any
/// previously published file byte-identical. This is the system's only
/// failure-avoidance guarantee: a run that collected nothing must never
/// blank out good data.
pub async fn publish(
    result: IngestResult,
    graphs: Option<MarketGraphs>,
    output_path: &str,
) -> Result<(), IngestError> {
    match result {
        IngestResult::Items(news) => {
            info!(count = news.len(), "Publishing collected news");
            let document = PublishedDocument {
                last_updated: Local::now().to_rfc3339(),
                news,
                graphs,
            };
            write_document(&document, output_path).await
        }
        IngestResult::Empty => {
            warn!(
                path = %output_path,
                "No items collected this run; previous document left untouched"
            );
            Ok(())
        }
    }
}

/// Serialize `document` and atomically overwrite `output_path` with it.
///
/// # Errors
///
/// [`IngestError::Json`] if serialization fails, [`IngestError::Io`] if the
/// temp-file write or the rename fails.
#[instrument(level = "info", skip(document), fields(path = %output_path))]
pub async fn write_document(
    document: &PublishedDocument,
    output_path: &str,
) -> Result<(), IngestError> {
    let json = serde_json::to_string_pretty(document)?;

    let tmp_path = format!("{output_path}.tmp");
    fs::write(&tmp_path, json.as_bytes()).await?;
    fs::rename(&tmp_path, output_path).await?;

    info!(
        items = document.news.len(),
        bytes = json.len(),
        "Wrote news document"
    );
    Ok(())
}
