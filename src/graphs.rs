//! Static market-share chart data shipped alongside the news list.
//!
//! The figures are fixed reference numbers, not fetched: the dashboard that
//! consumes the output renders them as-is next to the live news section.

use crate::models::{ChartDataset, MarketGraphs};

fn dataset(labels: &[&str], data: &[f64]) -> ChartDataset {
    ChartDataset {
        labels: labels.iter().map(|s| s.to_string()).collect(),
        data: data.to_vec(),
        source: None,
    }
}

/// The fixed chart block for the published document.
pub fn market_graphs() -> MarketGraphs {
    MarketGraphs {
        yearly_market_size: dataset(
            &["2022", "2023", "2024", "2025(예상)"],
            &[1000.0, 1200.0, 1500.0, 1800.0],
        ),
        country_market_share: dataset(
            &["중국", "한국", "미국", "독일", "기타"],
            &[45.0, 20.0, 15.0, 10.0, 10.0],
        ),
        company_market_share: dataset(
            &["LG전자", "보쉬", "덴소", "기타"],
            &[30.0, 25.0, 20.0, 25.0],
        ),
    }
}
