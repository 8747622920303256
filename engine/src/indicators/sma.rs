// Simple Moving Average (SMA) indicator implementation
use super::{window_mean, IndicatorCalculator, PriceField};
use serde_json::Value;
use shared::models::Bar;

pub struct Sma {
    name: String,
    period: usize,
    field: PriceField,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self::of(PriceField::Close, period)
    }

    /// Trailing average of traded volume.
    pub fn volume(period: usize) -> Self {
        Self::of(PriceField::Volume, period)
    }

    pub fn of(field: PriceField, period: usize) -> Self {
        let name = match field {
            PriceField::Close => format!("SMA({})", period),
            PriceField::Volume => format!("VolumeSMA({})", period),
        };
        Self { name, period, field }
    }
}

impl IndicatorCalculator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period, "field": self.field.label() })
    }

    fn calculate(&self, data: &[Bar]) -> Vec<Option<f64>> {
        if self.period == 0 || data.len() < self.period {
            return vec![None; data.len()];
        }

        let values: Vec<Option<f64>> = data.iter().map(|c| self.field.get(c)).collect();
        let mut results = vec![None; self.period - 1]; // No SMA for initial period
        results.extend(values.windows(self.period).map(window_mean));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::test_support::{bar_at, closes};

    #[test]
    fn test_sma_calculation() {
        let candles = closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let results = Sma::new(3).calculate(&candles);
        assert_eq!(results, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_sma_insufficient_data() {
        let candles = closes(&[1.0, 2.0]);
        assert_eq!(Sma::new(3).calculate(&candles), vec![None, None]);
    }

    #[test]
    fn test_sma_period_one() {
        let candles = closes(&[1.0, 2.0, 3.0]);
        assert_eq!(Sma::new(1).calculate(&candles), vec![Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_sma_empty_data() {
        assert!(Sma::new(3).calculate(&[]).is_empty());
    }

    #[test]
    fn test_volume_average_window() {
        let candles: Vec<_> = (0..25)
            .map(|i| bar_at(i, 1.0, 1.0, 1.0, 1.0, 100.0 * (i + 1) as f64))
            .collect();
        let results = Sma::volume(20).calculate(&candles);
        assert!(results[..19].iter().all(Option::is_none));
        // Volumes 100..=2000 average to 1050.
        assert_eq!(results[19], Some(1050.0));
        assert_eq!(results[24], Some(1550.0));
    }

    #[test]
    fn test_volume_average_missing_volume() {
        let mut candles: Vec<_> = (0..4).map(|i| bar_at(i, 1.0, 1.0, 1.0, 1.0, 10.0)).collect();
        candles[1].volume = None;
        let results = Sma::volume(2).calculate(&candles);
        assert_eq!(results, vec![None, None, None, Some(10.0)]);
    }
}
