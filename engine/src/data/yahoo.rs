//! Yahoo Finance chart endpoint (`/v8/finance/chart/{ticker}`).

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Url;
use serde::Deserialize;
use shared::models::{Bar, Series, TimeFrame};
use tracing::{debug, instrument, warn};

use super::provider::PriceProvider;
use crate::error::EngineError;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

fn column(values: &[Option<f64>], index: usize) -> Option<f64> {
    values.get(index).copied().flatten().filter(|v| v.is_finite())
}

/// Turns a chart payload into a series. Rows with no quote at all (the
/// in-progress session is often reported that way) are dropped.
fn parse_chart(ticker: &str, body: &str) -> Result<Series, EngineError> {
    let envelope: ChartEnvelope = serde_json::from_str(body)?;

    if let Some(error) = envelope.chart.error {
        if error.code == "Not Found" {
            return Ok(Series::empty(ticker));
        }
        return Err(EngineError::ProviderError(format!(
            "{}: {} ({})",
            ticker,
            error.code,
            error.description.unwrap_or_default()
        )));
    }

    let Some(result) = envelope.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(Series::empty(ticker));
    };
    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let Some(timestamp) = DateTime::<Utc>::from_timestamp(ts, 0) else {
            warn!(ticker, ts, "Skipping bar with invalid timestamp");
            continue;
        };
        let bar = Bar {
            timestamp,
            open: column(&quote.open, i),
            high: column(&quote.high, i),
            low: column(&quote.low, i),
            close: column(&quote.close, i),
            volume: column(&quote.volume, i),
        };
        if !bar.is_empty() {
            bars.push(bar);
        }
    }

    Ok(Series::new(ticker, bars))
}

#[derive(Clone)]
pub struct YahooFinanceProvider {
    base_url: Url,
    client: reqwest::Client,
}

impl YahooFinanceProvider {
    pub fn new(base_url: impl Into<String>, timeout: std::time::Duration) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ifr14-monitor/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into();
        let base_url = Url::parse(&base_url)
            .map_err(|e| EngineError::ConfigError(format!("Invalid Yahoo base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(EngineError::ConfigError(format!("Yahoo base URL '{}' cannot carry a path", base_url)));
        }
        Ok(Self { base_url, client })
    }

    /// `{base}/v8/finance/chart/{ticker}`, with the ticker percent-encoded as
    /// a single path segment.
    fn chart_url(&self, ticker: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["v8", "finance", "chart", ticker]);
        }
        url
    }
}

#[async_trait]
impl PriceProvider for YahooFinanceProvider {
    #[instrument(skip(self))]
    async fn fetch(&self, ticker: &str, lookback: Duration, interval: TimeFrame) -> Result<Series, EngineError> {
        let now = Utc::now();
        let from = now - lookback;
        let url = self.chart_url(ticker);

        let response = self
            .client
            .get(url)
            .query(&[
                ("period1", from.timestamp().to_string()),
                ("period2", now.timestamp().to_string()),
                ("interval", interval.as_query().to_string()),
                ("events", "history".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        // Unknown symbols come back as 404 with a chart error payload.
        if !status.is_success() && status != reqwest::StatusCode::NOT_FOUND {
            return Err(EngineError::ProviderError(format!("{} returned HTTP {}", ticker, status)));
        }

        let series = parse_chart(ticker, &body)?;
        debug!(ticker, bars = series.len(), "Fetched price history");
        Ok(series)
    }
}
