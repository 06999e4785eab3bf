//! # EV Motor News
//!
//! A run-once batch collector that gathers electric-vehicle motor industry
//! news from RSS feeds and a web search page, normalizes every item into a
//! fixed schema, and publishes a single JSON document together with static
//! market-share chart data.
//!
//! ## Usage
//!
//! ```sh
//! ev_motor_news -o news_data.json
//! ```
//!
//! ## Architecture
//!
//! The application is a linear three-stage pipeline:
//! 1. **Read**: Fetch each configured source in order (one attempt each)
//! 2. **Normalize**: Map entries to schema-complete records, cap per source
//! 3. **Publish**: Atomically overwrite the output document, unless the run
//!    collected nothing, in which case the previous file stays untouched

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod collect;
mod error;
mod graphs;
mod models;
mod outputs;
mod scrapers;
mod sources;

use cli::Cli;
use scrapers::USER_AGENT;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news collection starting up");

    let args = Cli::parse();
    debug!(?args.output, args.no_graphs, "Parsed CLI arguments");

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()?;

    let sources = sources::default_sources();
    info!(count = sources.len(), "Collecting from configured sources");

    let result = collect::ingest(&client, &sources).await?;
    let graphs = (!args.no_graphs).then(graphs::market_graphs);
    outputs::json::publish(result, graphs, &args.output).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
