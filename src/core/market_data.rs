//! Market data abstractions and core types

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Opening prices keyed by trading date, then by ticker.
pub type PriceTable = BTreeMap<NaiveDate, HashMap<String, f64>>;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches daily opening prices for `tickers` over the half-open range
    /// `[start, end)`. Dates without trading are simply absent from the table.
    async fn fetch_opening_prices(
        &self,
        tickers: &[&str],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceTable>;
}
