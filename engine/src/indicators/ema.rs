// Exponential Moving Average (EMA / MME) indicator implementation
use super::IndicatorCalculator;
use serde_json::Value;
use shared::models::Bar;

/// Adjusted exponentially weighted mean of closes: every past close carries
/// weight (1 - alpha)^k, normalised by the sum of the weights seen so far.
/// Defined from the first close onward; no warm-up window.
pub struct Ema {
    name: String,
    span: usize,
}

impl Ema {
    pub fn new(span: usize) -> Self {
        Self {
            name: format!("EMA({})", span),
            span,
        }
    }

    pub fn alpha(&self) -> f64 {
        2.0 / (self.span as f64 + 1.0)
    }
}

impl IndicatorCalculator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "span": self.span })
    }

    fn calculate(&self, data: &[Bar]) -> Vec<Option<f64>> {
        if self.span == 0 {
            return vec![None; data.len()];
        }

        let decay = 1.0 - self.alpha();
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        let mut results = Vec::with_capacity(data.len());

        for candle in data {
            // Missing closes still age the older observations.
            weighted_sum *= decay;
            weight_total *= decay;
            match candle.close {
                Some(close) => {
                    weighted_sum += close;
                    weight_total += 1.0;
                    results.push(Some(weighted_sum / weight_total));
                }
                None => results.push(None),
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::test_support::closes;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let value = actual.expect("expected a value");
        assert!((value - expected).abs() < 1e-9, "{} != {}", value, expected);
    }

    #[test]
    fn test_ema_calculation() {
        let candles = closes(&[10.0, 11.0, 12.0]);
        let results = Ema::new(3).calculate(&candles); // alpha = 0.5
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Some(10.0));
        assert_close(results[1], (11.0 + 0.5 * 10.0) / 1.5);
        assert_close(results[2], (12.0 + 0.5 * 11.0 + 0.25 * 10.0) / 1.75);
    }

    #[test]
    fn test_ema_defined_from_first_bar() {
        let candles = closes(&[5.0, 6.0, 7.0, 8.0]);
        let results = Ema::new(21).calculate(&candles);
        assert!(results.iter().all(Option::is_some));
        assert_eq!(results[0], Some(5.0));
    }

    #[test]
    fn test_ema_constant_series() {
        let candles = closes(&[42.0; 30]);
        for value in Ema::new(21).calculate(&candles) {
            assert_close(value, 42.0);
        }
    }

    #[test]
    fn test_ema_skips_missing_close() {
        let mut candles = closes(&[10.0, 11.0, 12.0]);
        candles[1].close = None;
        let results = Ema::new(3).calculate(&candles);
        assert_eq!(results[0], Some(10.0));
        assert_eq!(results[1], None);
        assert_close(results[2], (12.0 + 0.25 * 10.0) / 1.25);
    }

    #[test]
    fn test_ema_empty_data() {
        assert!(Ema::new(21).calculate(&[]).is_empty());
    }
}
