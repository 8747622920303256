use crate::config::settings::IndicatorParams;
use shared::models::{FrameRow, IndicatorFrame, SignalOutcome, SignalResult};
use shared::utils::round2;

/// The four sub-conditions checked on the last bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditions {
    pub momentum_cross: bool,
    pub trend: bool,
    pub volume_ok: bool,
    pub reversal: bool,
}

impl Conditions {
    pub fn all(&self) -> bool {
        self.momentum_cross && self.trend && self.volume_ok && self.reversal
    }
}

/// Indicators the previous bar must carry for the pair to be usable.
struct PreviousBar {
    rsi: f64,
}

impl PreviousBar {
    fn from_row(row: &FrameRow) -> Option<Self> {
        row.ema?;
        row.volume_avg?;
        Some(Self { rsi: row.rsi? })
    }
}

/// Values of the last bar every condition depends on.
struct LastBar {
    close: f64,
    volume: f64,
    rsi: f64,
    ema: f64,
    volume_avg: f64,
    reversal: bool,
}

impl LastBar {
    fn from_row(row: &FrameRow) -> Option<Self> {
        Some(Self {
            close: row.bar.close?,
            volume: row.bar.volume?,
            rsi: row.rsi?,
            ema: row.ema?,
            volume_avg: row.volume_avg?,
            reversal: row.reversal?,
        })
    }
}

/// Checks the IFR cross, trend, volume and reversal rules on the last two
/// rows. Anything short of two usable rows is `InsufficientData`, never a
/// negative signal.
pub fn evaluate(ticker: &str, frame: &IndicatorFrame, params: &IndicatorParams) -> SignalOutcome {
    let insufficient = || SignalOutcome::InsufficientData {
        ticker: ticker.to_string(),
        bars: frame.len(),
    };

    let Some((previous, last)) = frame.last_two() else {
        return insufficient();
    };
    let (Some(previous), Some(last)) = (PreviousBar::from_row(previous), LastBar::from_row(last)) else {
        return insufficient();
    };

    let conditions = Conditions {
        momentum_cross: last.rsi < params.oversold && previous.rsi >= params.oversold,
        trend: last.close >= last.ema,
        volume_ok: last.volume >= last.volume_avg,
        reversal: last.reversal,
    };

    SignalOutcome::Evaluated(SignalResult {
        ticker: ticker.to_string(),
        close: round2(last.close),
        rsi: round2(last.rsi),
        ema: round2(last.ema),
        momentum_cross: conditions.momentum_cross,
        trend: conditions.trend,
        volume_ok: conditions.volume_ok,
        reversal: conditions.reversal,
        alert: conditions.all(),
    })
}
