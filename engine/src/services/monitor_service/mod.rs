// engine/src/services/monitor_service/mod.rs
// One pass over the configured tickers: fetch, compute indicators, evaluate.
// Tickers are handled one after another and never share state.

use shared::models::{ChartSeries, SignalOutcome, SignalResult};

use crate::config::settings::MonitorSettings;
use crate::data::PriceProvider;
use crate::error::EngineError;

pub mod chart_window;
pub mod evaluate_ticker;

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The provider had no bars for the ticker.
    MissingData,
    ProviderFailure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedTicker {
    pub ticker: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorReport {
    pub outcomes: Vec<SignalOutcome>,
    pub skipped: Vec<SkippedTicker>,
    pub charts: Vec<ChartSeries>,
}

impl MonitorReport {
    pub fn results(&self) -> impl Iterator<Item = &SignalResult> {
        self.outcomes.iter().filter_map(SignalOutcome::result)
    }

    pub fn alerts(&self) -> Vec<String> {
        self.results()
            .filter(|r| r.alert)
            .map(SignalResult::alert_line)
            .collect()
    }

    pub fn has_alerts(&self) -> bool {
        self.results().any(|r| r.alert)
    }

    pub fn alert_body(&self) -> String {
        self.alerts().join("\n")
    }
}

pub struct MonitorService<P> {
    provider: P,
    settings: MonitorSettings,
}

impl<P: PriceProvider> MonitorService<P> {
    pub fn new(provider: P, settings: MonitorSettings) -> Result<Self, EngineError> {
        settings.validate()?;
        Ok(MonitorService { provider, settings })
    }

    pub fn settings(&self) -> &MonitorSettings {
        &self.settings
    }

    /// Runs the configured ticker list.
    pub async fn run_configured(&self) -> MonitorReport {
        self.run(&self.settings.tickers).await
    }

    pub async fn run(&self, tickers: &[String]) -> MonitorReport {
        tracing::info!(tickers = tickers.len(), "Starting IFR14 monitor run");
        let mut report = MonitorReport::default();

        for ticker in tickers {
            match evaluate_ticker::handle_evaluate_ticker(&self.provider, ticker, &self.settings).await {
                Ok(evaluation) => {
                    if let Some(chart) = evaluation.chart {
                        report.charts.push(chart);
                    }
                    report.outcomes.push(evaluation.outcome);
                }
                Err(reason) => report.skipped.push(SkippedTicker {
                    ticker: ticker.clone(),
                    reason,
                }),
            }
        }

        tracing::info!(
            evaluated = report.outcomes.len(),
            skipped = report.skipped.len(),
            alerts = report.alerts().len(),
            "Monitor run finished"
        );
        report
    }
}
