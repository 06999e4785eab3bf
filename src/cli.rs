//! Command-line interface definitions.
//!
//! The source list itself is built in, so the surface is small: where to put
//! the document and whether to include the static chart block.

use clap::Parser;

/// Command-line arguments for the news collector.
///
/// # Examples
///
/// ```sh
/// # Default run, writes ./news_data.json
/// ev_motor_news
///
/// # Publish elsewhere, news only
/// ev_motor_news -o /srv/dashboard/news_data.json --no-graphs
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the JSON document to publish
    #[arg(short, long, default_value = "news_data.json")]
    pub output: String,

    /// Omit the static market chart block from the document
    #[arg(long)]
    pub no_graphs: bool,
}
