// Per-ticker step of a monitor run
use shared::models::{ChartSeries, SignalOutcome};

use super::{chart_window, SkipReason};
use crate::config::settings::MonitorSettings;
use crate::data::PriceProvider;
use crate::indicators::compute_frame;
use crate::signals::evaluate;

pub struct TickerEvaluation {
    pub outcome: SignalOutcome,
    pub chart: Option<ChartSeries>,
}

pub async fn handle_evaluate_ticker<P: PriceProvider + ?Sized>(
    provider: &P,
    ticker: &str,
    settings: &MonitorSettings,
) -> Result<TickerEvaluation, SkipReason> {
    let series = match provider.fetch(ticker, settings.lookback(), settings.interval).await {
        Ok(series) => series,
        Err(e) => {
            tracing::error!(ticker, error = %e, "Price fetch failed, skipping ticker");
            return Err(SkipReason::ProviderFailure(e.to_string()));
        }
    };
    if series.is_empty() {
        tracing::warn!(ticker, "No price data returned, skipping ticker");
        return Err(SkipReason::MissingData);
    }

    let frame = compute_frame(&series, &settings.indicators);
    let outcome = evaluate(ticker, &frame, &settings.indicators);
    match &outcome {
        SignalOutcome::Evaluated(result) => tracing::debug!(
            ticker,
            rsi = result.rsi,
            close = result.close,
            alert = result.alert,
            "Ticker evaluated"
        ),
        SignalOutcome::InsufficientData { bars, .. } => {
            tracing::warn!(ticker, bars, "Not enough history to evaluate signal")
        }
    }

    let chart = settings
        .show_chart
        .then(|| chart_window::build_chart(ticker, &frame, settings.chart_window));

    Ok(TickerEvaluation { outcome, chart })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MarketDataStore;
    use chrono::{Duration, TimeZone, Utc};
    use shared::models::{Bar, TimeFrame};

    #[tokio::test]
    async fn short_history_is_insufficient_not_negative() {
        let mut store = MarketDataStore::new();
        let bars = (0..10)
            .map(|i| {
                let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(i);
                Bar::new(ts, 10.0, 11.0, 9.0, 10.5, 100.0)
            })
            .collect();
        store.add_bars("BBDC4.SA", TimeFrame::Day1, bars);

        let evaluation = handle_evaluate_ticker(&store, "BBDC4.SA", &MonitorSettings::default())
            .await
            .unwrap();
        assert_eq!(
            evaluation.outcome,
            SignalOutcome::InsufficientData { ticker: "BBDC4.SA".to_string(), bars: 10 }
        );
        assert!(evaluation.chart.is_none());
    }
}
