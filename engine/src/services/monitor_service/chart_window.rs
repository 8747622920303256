// Trailing close/IFR window for the price chart
use shared::models::{ChartPoint, ChartSeries, IndicatorFrame};

/// The last `window` rows that have both a close and an IFR value.
pub fn build_chart(ticker: &str, frame: &IndicatorFrame, window: usize) -> ChartSeries {
    let mut points: Vec<ChartPoint> = frame
        .rows
        .iter()
        .rev()
        .filter_map(|row| {
            Some(ChartPoint {
                timestamp: row.bar.timestamp,
                close: row.bar.close?,
                rsi: row.rsi?,
            })
        })
        .take(window)
        .collect();
    points.reverse();

    ChartSeries {
        ticker: ticker.to_string(),
        points,
    }
}
