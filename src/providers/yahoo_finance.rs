use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::market_data::{MarketDataProvider, PriceTable};

fn day_start_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Pairs each bar's exchange-local trading date with its opening price,
/// dropping bars without an open.
fn extract_opening_prices(chart_item: &PriceChartItem) -> Vec<(NaiveDate, f64)> {
    let offset = chart_item.meta.gmt_offset.unwrap_or(0);

    match (
        chart_item.timestamp.as_ref(),
        chart_item
            .indicators
            .as_ref()
            .and_then(|inds| inds.quote.first())
            .and_then(|q| q.open.as_ref()),
    ) {
        (Some(timestamps), Some(opens)) => timestamps
            .iter()
            .zip(opens)
            .filter_map(|(ts, open)| {
                let date = Utc.timestamp_opt(ts + offset, 0).single()?.date_naive();
                open.map(|price| (date, price))
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Daily opening prices from the Yahoo Finance chart API.
pub struct YahooFinanceProvider {
    base_url: String,
}

impl YahooFinanceProvider {
    pub fn new(base_url: &str) -> Self {
        YahooFinanceProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[instrument(name = "YahooOpenFetch", skip(self, client), fields(ticker = %ticker))]
    async fn fetch_ticker_opens(
        &self,
        client: &reqwest::Client,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, f64)>> {
        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url,
            ticker,
            day_start_timestamp(start),
            day_start_timestamp(end)
        );
        debug!("Requesting opening prices from {}", url);

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for symbol: {} URL: {}", e, ticker, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for symbol: {}",
                response.status(),
                ticker
            ));
        }

        let text = response.text().await?;
        let data: YahooPriceResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", ticker, e))?;

        let opens: Vec<_> = data
            .chart
            .result
            .unwrap_or_default()
            .first()
            .map(extract_opening_prices)
            .unwrap_or_default()
            .into_iter()
            .filter(|(date, _)| *date >= start && *date < end)
            .collect();

        debug!(bars = opens.len(), "Received Yahoo opening prices");
        Ok(opens)
    }
}

#[derive(Deserialize, Debug)]
struct YahooPriceResponse {
    chart: PriceChartResult,
}

#[derive(Deserialize, Debug)]
struct PriceChartResult {
    result: Option<Vec<PriceChartItem>>,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    open: Option<Vec<Option<f64>>>,
}

#[derive(Deserialize, Debug)]
struct PriceChartItem {
    meta: PriceChartMeta,
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

#[derive(Deserialize, Debug)]
struct PriceChartMeta {
    #[serde(alias = "gmtoffset")]
    gmt_offset: Option<i64>,
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn fetch_opening_prices(
        &self,
        tickers: &[&str],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceTable> {
        let client = reqwest::Client::builder()
            .user_agent("ndxfolio/0.1")
            .build()?;

        let mut table = PriceTable::new();
        for ticker in tickers {
            for (date, open) in self.fetch_ticker_opens(&client, ticker, start, end).await? {
                table
                    .entry(date)
                    .or_default()
                    .insert(ticker.to_string(), open);
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // 2023-01-03 14:30 UTC, the NYSE open.
    const JAN_3_OPEN_TS: i64 = 1672756200;

    fn jan_3() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 3).unwrap()
    }

    fn jan_4() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 4).unwrap()
    }

    fn chart_body(timestamps: &str, opens: &str) -> String {
        format!(
            r#"{{
                "chart": {{
                    "result": [{{
                        "meta": {{
                            "currency": "USD",
                            "gmtoffset": -18000
                        }},
                        "timestamp": [{timestamps}],
                        "indicators": {{
                            "quote": [{{
                                "open": [{opens}]
                            }}]
                        }}
                    }}],
                    "error": null
                }}
            }}"#
        )
    }

    async fn mount_chart(server: &MockServer, ticker: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/v8/finance/chart/{ticker}")))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_successful_opening_prices_fetch() {
        let mock_server = MockServer::start().await;
        mount_chart(
            &mock_server,
            "AAPL",
            200,
            &chart_body(&JAN_3_OPEN_TS.to_string(), "130.28"),
        )
        .await;
        mount_chart(
            &mock_server,
            "MSFT",
            200,
            &chart_body(&JAN_3_OPEN_TS.to_string(), "243.08"),
        )
        .await;

        let provider = YahooFinanceProvider::new(&mock_server.uri());
        let table = provider
            .fetch_opening_prices(&["AAPL", "MSFT"], jan_3(), jan_4())
            .await
            .unwrap();

        assert_eq!(table.len(), 1);
        let row = &table[&jan_3()];
        assert_eq!(row["AAPL"], 130.28);
        assert_eq!(row["MSFT"], 243.08);
    }

    #[tokio::test]
    async fn test_request_covers_the_whole_day() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/AAPL"))
            .and(query_param("period1", "1672704000"))
            .and(query_param("period2", "1672790400"))
            .and(query_param("interval", "1d"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(chart_body(&JAN_3_OPEN_TS.to_string(), "130.28")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = YahooFinanceProvider::new(&mock_server.uri());
        let table = provider
            .fetch_opening_prices(&["AAPL"], jan_3(), jan_4())
            .await
            .unwrap();
        assert_eq!(table[&jan_3()]["AAPL"], 130.28);
    }

    #[tokio::test]
    async fn test_gmt_offset_sets_trading_date() {
        // 2023-01-04 02:00 UTC is still 2023-01-03 in New York.
        let late_ts = 1672797600;
        let mock_server = MockServer::start().await;
        mount_chart(
            &mock_server,
            "AAPL",
            200,
            &chart_body(&late_ts.to_string(), "131.00"),
        )
        .await;

        let provider = YahooFinanceProvider::new(&mock_server.uri());
        let table = provider
            .fetch_opening_prices(&["AAPL"], jan_3(), jan_4())
            .await
            .unwrap();
        assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![jan_3()]);
    }

    #[tokio::test]
    async fn test_null_opens_are_skipped() {
        let mock_server = MockServer::start().await;
        mount_chart(
            &mock_server,
            "AAPL",
            200,
            &chart_body(&JAN_3_OPEN_TS.to_string(), "null"),
        )
        .await;

        let provider = YahooFinanceProvider::new(&mock_server.uri());
        let table = provider
            .fetch_opening_prices(&["AAPL"], jan_3(), jan_4())
            .await
            .unwrap();
        assert!(table.is_empty());
    }

    #[tokio::test]
    async fn test_non_trading_day_returns_empty_table() {
        let mock_response = r#"{
            "chart": {
                "result": [{
                    "meta": {
                        "currency": "USD",
                        "gmtoffset": -18000
                    },
                    "indicators": {
                        "quote": [{}]
                    }
                }],
                "error": null
            }
        }"#;
        let mock_server = MockServer::start().await;
        mount_chart(&mock_server, "AAPL", 200, mock_response).await;

        let sunday = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let provider = YahooFinanceProvider::new(&mock_server.uri());
        let table = provider
            .fetch_opening_prices(&["AAPL"], sunday, jan_3())
            .await
            .unwrap();
        assert!(table.is_empty());
    }

    #[tokio::test]
    async fn test_yahoo_api_error_response() {
        let mock_server = MockServer::start().await;
        mount_chart(&mock_server, "AAPL", 500, "").await;

        let provider = YahooFinanceProvider::new(&mock_server.uri());
        let result = provider
            .fetch_opening_prices(&["AAPL"], jan_3(), jan_4())
            .await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error for symbol: AAPL"
        );
    }

    #[tokio::test]
    async fn test_yahoo_api_malformed_response() {
        let mock_response = r#"{
            "charts": {
                "result": []
            }
        }"#; // "charts" instead of "chart"
        let mock_server = MockServer::start().await;
        mount_chart(&mock_server, "AAPL", 200, mock_response).await;

        let provider = YahooFinanceProvider::new(&mock_server.uri());
        let result = provider
            .fetch_opening_prices(&["AAPL"], jan_3(), jan_4())
            .await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON response for AAPL")
        );
    }
}
