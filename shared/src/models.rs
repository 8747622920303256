use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One trading session. Any OHLCV field may be missing when the provider
/// returned no value for it; indicators treat such bars as "no data".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl Bar {
    /// A bar with every field present.
    pub fn new(timestamp: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close: Some(close),
            volume: Some(volume),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.open.is_some()
            && self.high.is_some()
            && self.low.is_some()
            && self.close.is_some()
            && self.volume.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_none()
            && self.high.is_none()
            && self.low.is_none()
            && self.close.is_none()
            && self.volume.is_none()
    }
}

/// Time-ordered bars of a single ticker. Timestamps are strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub ticker: String,
    bars: Vec<Bar>,
}

impl Series {
    /// Sorts by timestamp and drops bars sharing a timestamp with an earlier one.
    pub fn new(ticker: impl Into<String>, mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|b| b.timestamp);
        bars.dedup_by_key(|b| b.timestamp);
        Self {
            ticker: ticker.into(),
            bars,
        }
    }

    pub fn empty(ticker: impl Into<String>) -> Self {
        Self::new(ticker, Vec::new())
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.bars.last().map(|b| b.timestamp)
    }

    /// Keeps only the bars at or after `from`.
    pub fn since(self, from: DateTime<Utc>) -> Self {
        let bars = self.bars.into_iter().filter(|b| b.timestamp >= from).collect();
        Self {
            ticker: self.ticker,
            bars,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    Minute1,
    Minute5,
    Minute15,
    Minute30,
    Hour1,
    Day1,
}

impl TimeFrame {
    /// Interval code understood by the Yahoo chart endpoint.
    pub fn as_query(&self) -> &'static str {
        match self {
            TimeFrame::Minute1 => "1m",
            TimeFrame::Minute5 => "5m",
            TimeFrame::Minute15 => "15m",
            TimeFrame::Minute30 => "30m",
            TimeFrame::Hour1 => "1h",
            TimeFrame::Day1 => "1d",
        }
    }
}

impl Default for TimeFrame {
    fn default() -> Self {
        TimeFrame::Day1
    }
}

/// A bar together with its derived indicator values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRow {
    pub bar: Bar,
    pub rsi: Option<f64>,
    pub ema: Option<f64>,
    pub volume_avg: Option<f64>,
    pub reversal: Option<bool>,
}

/// Same length and ordering as the series it was computed from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorFrame {
    pub rows: Vec<FrameRow>,
}

impl IndicatorFrame {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The last two rows as `(previous, last)`.
    pub fn last_two(&self) -> Option<(&FrameRow, &FrameRow)> {
        match self.rows.as_slice() {
            [.., previous, last] => Some((previous, last)),
            _ => None,
        }
    }
}

/// Snapshot of the latest bar for one ticker. Prices and IFR are rounded to
/// two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub ticker: String,
    pub close: f64,
    pub rsi: f64,
    pub ema: f64,
    pub momentum_cross: bool,
    pub trend: bool,
    pub volume_ok: bool,
    pub reversal: bool,
    pub alert: bool,
}

impl SignalResult {
    pub fn alert_line(&self) -> String {
        format!("{} | IFR: {:.2} | Preço: R${:.2}", self.ticker, self.rsi, self.close)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SignalOutcome {
    Evaluated(SignalResult),
    InsufficientData { ticker: String, bars: usize },
}

impl SignalOutcome {
    pub fn ticker(&self) -> &str {
        match self {
            SignalOutcome::Evaluated(result) => &result.ticker,
            SignalOutcome::InsufficientData { ticker, .. } => ticker,
        }
    }

    pub fn result(&self) -> Option<&SignalResult> {
        match self {
            SignalOutcome::Evaluated(result) => Some(result),
            SignalOutcome::InsufficientData { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    pub rsi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub ticker: String,
    pub points: Vec<ChartPoint>,
}
