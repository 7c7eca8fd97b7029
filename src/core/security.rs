//! Static security reference data: ticker validation, names, industries and opening prices.

use crate::core::market_data::MarketDataProvider;
use crate::core::nasdaq100::NASDAQ_100;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Security {
    pub ticker: &'static str,
    pub company_name: &'static str,
    pub industry: &'static str,
}

impl Security {
    pub const fn new(
        ticker: &'static str,
        company_name: &'static str,
        industry: &'static str,
    ) -> Self {
        Security {
            ticker,
            company_name,
            industry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Invalid ticker: {unknown:?}. Please use a valid ticker from the Nasdaq 100 index.")]
    InvalidTicker { unknown: Vec<String> },

    #[error("Invalid date: {date}. No data for given date.")]
    NoData { date: NaiveDate },

    #[error("Invalid date: {input}. Expected YYYY-MM-DD.")]
    InvalidDate { input: String },
}

static NASDAQ_100_DIRECTORY: LazyLock<SecurityDirectory> =
    LazyLock::new(|| SecurityDirectory::from_securities(NASDAQ_100));

/// Read-only lookup over a static security table.
///
/// Every lookup validates its tickers first, so callers never need a
/// separate `validate` call.
#[derive(Debug)]
pub struct SecurityDirectory {
    index: HashMap<&'static str, &'static Security>,
}

impl SecurityDirectory {
    /// The process-wide Nasdaq-100 directory.
    pub fn nasdaq100() -> &'static SecurityDirectory {
        &NASDAQ_100_DIRECTORY
    }

    /// Builds a directory from a static table. A ticker listed twice keeps
    /// its last entry.
    pub fn from_securities(securities: &'static [Security]) -> Self {
        let index: HashMap<_, _> = securities.iter().map(|s| (s.ticker, s)).collect();
        debug!(
            securities = securities.len(),
            unique = index.len(),
            "Built security directory"
        );
        SecurityDirectory { index }
    }

    pub fn get(&self, ticker: &str) -> Option<&'static Security> {
        self.index.get(ticker).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All known tickers, sorted.
    pub fn tickers(&self) -> Vec<&'static str> {
        let mut tickers: Vec<_> = self.index.keys().copied().collect();
        tickers.sort_unstable();
        tickers
    }

    /// Fails with [`DirectoryError::InvalidTicker`] listing every unknown
    /// ticker in input order, repeats included.
    pub fn validate<S: AsRef<str>>(&self, tickers: &[S]) -> Result<(), DirectoryError> {
        let unknown: Vec<String> = tickers
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !self.index.contains_key(*t))
            .map(str::to_string)
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(DirectoryError::InvalidTicker { unknown })
        }
    }

    pub fn lookup<S: AsRef<str>>(
        &self,
        tickers: &[S],
    ) -> Result<Vec<&'static Security>, DirectoryError> {
        self.validate(tickers)?;
        Ok(tickers
            .iter()
            .filter_map(|t| self.get(t.as_ref()))
            .collect())
    }

    pub fn company_names<S: AsRef<str>>(
        &self,
        tickers: &[S],
    ) -> Result<Vec<&'static str>, DirectoryError> {
        Ok(self
            .lookup(tickers)?
            .into_iter()
            .map(|s| s.company_name)
            .collect())
    }

    pub fn industries<S: AsRef<str>>(
        &self,
        tickers: &[S],
    ) -> Result<Vec<&'static str>, DirectoryError> {
        Ok(self
            .lookup(tickers)?
            .into_iter()
            .map(|s| s.industry)
            .collect())
    }

    /// Opening prices for `tickers` on `date`.
    ///
    /// Tickers are validated before the provider is contacted. The provider
    /// is asked for `[date, date + 1)`; an empty answer is reported as
    /// [`DirectoryError::NoData`]. Tickers without an opening price on that
    /// date are left out of the result. An empty `tickers` slice yields an
    /// empty map without contacting the provider.
    #[instrument(name = "OpeningPrices", skip(self, tickers, provider), fields(date = %date))]
    pub async fn opening_prices<S: AsRef<str> + Sync>(
        &self,
        tickers: &[S],
        date: NaiveDate,
        provider: &dyn MarketDataProvider,
    ) -> Result<HashMap<String, f64>> {
        self.validate(tickers)?;
        if tickers.is_empty() {
            return Ok(HashMap::new());
        }

        let symbols: Vec<&str> = tickers.iter().map(AsRef::as_ref).collect();
        let end = date.succ_opt().ok_or_else(|| DirectoryError::InvalidDate {
            input: date.to_string(),
        })?;

        let table = provider.fetch_opening_prices(&symbols, date, end).await?;
        let (_, row) = table
            .range(date..end)
            .next()
            .ok_or(DirectoryError::NoData { date })?;

        let prices: HashMap<String, f64> = symbols
            .iter()
            .filter_map(|s| row.get(*s).map(|price| (s.to_string(), *price)))
            .collect();
        if prices.is_empty() {
            return Err(DirectoryError::NoData { date }.into());
        }

        debug!(count = prices.len(), "Resolved opening prices");
        Ok(prices)
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, DirectoryError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| DirectoryError::InvalidDate {
        input: input.to_string(),
    })
}
