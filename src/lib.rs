pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::security::{SecurityDirectory, parse_date};
use anyhow::Result;
use std::collections::HashMap;
use tracing::{debug, info};

pub use crate::core::chart::{plot_efficient_frontier_overlay, render_overlay};
pub use crate::core::overlay::{build_overlay, extract_named_portfolio, sample_random_portfolios};

pub fn yahoo_provider(config: &AppConfig) -> providers::YahooFinanceProvider {
    providers::YahooFinanceProvider::new(config.yahoo_base_url())
}

/// Opening prices of Nasdaq-100 `tickers` on `date` (`YYYY-MM-DD`), fetched
/// from the Yahoo provider named in `config`.
pub async fn nasdaq100_opening_prices<S: AsRef<str> + Sync>(
    config: &AppConfig,
    tickers: &[S],
    date: &str,
) -> Result<HashMap<String, f64>> {
    let directory = SecurityDirectory::nasdaq100();
    directory.validate(tickers)?;
    let date = parse_date(date)?;
    debug!(tickers = tickers.len(), %date, "Fetching Nasdaq-100 opening prices");

    let provider = yahoo_provider(config);
    let prices = directory.opening_prices(tickers, date, &provider).await?;
    info!(count = prices.len(), %date, "Fetched opening prices");
    Ok(prices)
}
