// Relative Strength Index (IFR) indicator implementation
use super::{window_mean, IndicatorCalculator};
use serde_json::Value;
use shared::models::Bar;

pub struct Rsi {
    name: String,
    period: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self {
            name: format!("RSI({})", period),
            period,
        }
    }
}

/// RSI from average gain and loss. A window without losses is pinned to 100
/// instead of dividing by zero.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

impl IndicatorCalculator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period })
    }

    fn calculate(&self, data: &[Bar]) -> Vec<Option<f64>> {
        if data.len() <= self.period || self.period == 0 {
            return vec![None; data.len()];
        }

        // The first bar has no previous close, so its change is undefined.
        let mut gains = Vec::with_capacity(data.len());
        let mut losses = Vec::with_capacity(data.len());
        gains.push(None);
        losses.push(None);
        for pair in data.windows(2) {
            let change = match (pair[0].close, pair[1].close) {
                (Some(prev), Some(curr)) => Some(curr - prev),
                _ => None,
            };
            gains.push(change.map(|c| c.max(0.0)));
            losses.push(change.map(|c| (-c).max(0.0)));
        }

        let mut results = vec![None; self.period - 1];
        for end in self.period..=data.len() {
            let start = end - self.period;
            let value = match (window_mean(&gains[start..end]), window_mean(&losses[start..end])) {
                (Some(avg_gain), Some(avg_loss)) => Some(rsi_from_averages(avg_gain, avg_loss)),
                _ => None,
            };
            results.push(value);
        }
        results
    }
}
