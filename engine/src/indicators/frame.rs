// Builds the indicator-augmented frame the signal evaluator reads
use super::{reversal_flags, Ema, IndicatorCalculator, Rsi, Sma};
use crate::config::settings::IndicatorParams;
use shared::models::{FrameRow, IndicatorFrame, Series};

pub fn compute_frame(series: &Series, params: &IndicatorParams) -> IndicatorFrame {
    let bars = series.bars();
    if bars.is_empty() {
        return IndicatorFrame::default();
    }

    let rsi = Rsi::new(params.rsi_period);
    let ema = Ema::new(params.ema_span);
    let volume_avg = Sma::volume(params.volume_window);

    for calculator in [&rsi as &dyn IndicatorCalculator, &ema, &volume_avg] {
        tracing::trace!(
            ticker = %series.ticker,
            indicator = calculator.name(),
            parameters = %calculator.parameters(),
            "Computing indicator"
        );
    }

    let rsi_values = rsi.calculate(bars);
    let ema_values = ema.calculate(bars);
    let volume_values = volume_avg.calculate(bars);
    let reversals = reversal_flags(bars);

    let rows = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| FrameRow {
            bar: bar.clone(),
            rsi: rsi_values[i],
            ema: ema_values[i],
            volume_avg: volume_values[i],
            reversal: reversals[i],
        })
        .collect();

    IndicatorFrame { rows }
}
