// In-memory price history, keyed by ticker and timeframe
use async_trait::async_trait;
use chrono::Duration;
use shared::models::{Bar, Series, TimeFrame};
use std::collections::HashMap;

use super::provider::PriceProvider;
use crate::error::EngineError;

#[derive(Debug, Default)]
pub struct MarketDataStore {
    data: HashMap<String, HashMap<TimeFrame, Vec<Bar>>>,
}

impl MarketDataStore {
    pub fn new() -> Self {
        MarketDataStore {
            data: HashMap::new(),
        }
    }

    /// Merges `new_bars` into the stored history. Later inserts never
    /// replace a bar already stored for the same timestamp.
    pub fn add_bars(&mut self, ticker: &str, timeframe: TimeFrame, new_bars: Vec<Bar>) {
        let ticker_data = self.data.entry(ticker.to_string()).or_default();
        let timeframe_data = ticker_data.entry(timeframe).or_default();

        timeframe_data.extend(new_bars);
        timeframe_data.sort_by_key(|b| b.timestamp);
        timeframe_data.dedup_by_key(|b| b.timestamp);
    }

    pub fn get_series(&self, ticker: &str, timeframe: TimeFrame) -> Option<Series> {
        self.data
            .get(ticker)
            .and_then(|ticker_data| ticker_data.get(&timeframe))
            .map(|bars| Series::new(ticker, bars.clone()))
    }
}

#[async_trait]
impl PriceProvider for MarketDataStore {
    /// The window is anchored at the newest stored bar.
    async fn fetch(&self, ticker: &str, lookback: Duration, interval: TimeFrame) -> Result<Series, EngineError> {
        let Some(series) = self.get_series(ticker, interval) else {
            return Ok(Series::empty(ticker));
        };
        match series.last_timestamp() {
            Some(newest) => Ok(series.since(newest - lookback)),
            None => Ok(series),
        }
    }
}
