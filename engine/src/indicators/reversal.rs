// Bullish rejection candle: lower wick longer than a non-zero real body
use shared::models::Bar;

/// Undefined when open, close or low is missing. A doji (zero body) never
/// qualifies.
pub fn is_reversal(bar: &Bar) -> Option<bool> {
    let (open, close, low) = (bar.open?, bar.close?, bar.low?);
    let body = (close - open).abs();
    let lower_shadow = open.min(close) - low;
    Some(lower_shadow > body && body > 0.0)
}

pub fn reversal_flags(data: &[Bar]) -> Vec<Option<bool>> {
    data.iter().map(is_reversal).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::test_support::bar_at;

    #[test]
    fn long_lower_wick_flags() {
        // body 0.5, lower shadow 2.0
        let bar = bar_at(0, 50.0, 51.0, 48.0, 50.5, 1.0);
        assert_eq!(is_reversal(&bar), Some(true));
    }

    #[test]
    fn bearish_body_with_long_wick_flags() {
        // open 51, close 50: body 1.0, lower shadow 50 - 47 = 3.0
        let bar = bar_at(0, 51.0, 52.0, 47.0, 50.0, 1.0);
        assert_eq!(is_reversal(&bar), Some(true));
    }

    #[test]
    fn doji_never_flags() {
        for low in [0.0, 10.0, 49.0, 50.0] {
            let bar = bar_at(0, 50.0, 60.0, low, 50.0, 1.0);
            assert_eq!(is_reversal(&bar), Some(false), "low {}", low);
        }
    }

    #[test]
    fn short_wick_does_not_flag() {
        // body 2.0, lower shadow 1.0
        assert_eq!(is_reversal(&bar_at(0, 50.0, 53.0, 49.0, 52.0, 1.0)), Some(false));
        // lower shadow equal to body
        assert_eq!(is_reversal(&bar_at(0, 50.0, 53.0, 48.0, 52.0, 1.0)), Some(false));
    }

    #[test]
    fn missing_low_is_undefined() {
        let mut bar = bar_at(0, 50.0, 51.0, 48.0, 50.5, 1.0);
        bar.low = None;
        assert_eq!(is_reversal(&bar), None);
        assert_eq!(reversal_flags(&[bar]), vec![None]);
    }
}
