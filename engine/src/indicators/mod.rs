// Technical indicators module
pub mod ema;
pub mod frame;
pub mod reversal;
pub mod rsi;
pub mod sma;

pub use ema::Ema;
pub use frame::compute_frame;
pub use reversal::{is_reversal, reversal_flags};
pub use rsi::Rsi;
pub use sma::Sma;

use serde_json::Value;
use shared::models::Bar;

// Common trait for all indicators
pub trait IndicatorCalculator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Parameters used for this indicator instance
    fn calculate(&self, data: &[Bar]) -> Vec<Option<f64>>; // None where the value is undefined (short history or missing fields)
}

/// Bar field an indicator reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    Close,
    Volume,
}

impl PriceField {
    pub fn get(&self, bar: &Bar) -> Option<f64> {
        match self {
            PriceField::Close => bar.close,
            PriceField::Volume => bar.volume,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PriceField::Close => "close",
            PriceField::Volume => "volume",
        }
    }
}

/// Mean of a window, undefined if any element is missing.
pub(crate) fn window_mean(window: &[Option<f64>]) -> Option<f64> {
    let mut sum = 0.0;
    for value in window {
        sum += (*value)?;
    }
    Some(sum / window.len() as f64)
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{Duration, TimeZone, Utc};
    use shared::models::Bar;

    pub fn bar_at(index: usize, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Bar {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(index as i64);
        Bar::new(timestamp, open, high, low, close, volume)
    }

    pub fn closes(values: &[f64]) -> Vec<Bar> {
        values
            .iter()
            .enumerate()
            .map(|(i, &c)| bar_at(i, c, c, c, c, 0.0))
            .collect()
    }
}
