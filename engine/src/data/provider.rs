//! Price history provider interface.

use async_trait::async_trait;
use chrono::Duration;
use shared::models::{Series, TimeFrame};

use crate::error::EngineError;

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Bars for `ticker` covering the trailing `lookback`, oldest first.
    /// An empty series means the provider has nothing for that ticker.
    async fn fetch(&self, ticker: &str, lookback: Duration, interval: TimeFrame) -> Result<Series, EngineError>;
}

#[async_trait]
impl<T: PriceProvider + ?Sized> PriceProvider for Box<T> {
    async fn fetch(&self, ticker: &str, lookback: Duration, interval: TimeFrame) -> Result<Series, EngineError> {
        (**self).fetch(ticker, lookback, interval).await
    }
}
