// Settings handed to the monitor by its caller for each run
use serde::Deserialize;
use shared::models::TimeFrame;

use crate::error::EngineError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct IndicatorParams {
    pub rsi_period: usize,
    pub ema_span: usize,
    pub volume_window: usize,
    pub oversold: f64,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        IndicatorParams {
            rsi_period: 14,
            ema_span: 21,
            volume_window: 20,
            oversold: 30.0,
        }
    }
}

impl IndicatorParams {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rsi_period == 0 || self.ema_span == 0 || self.volume_window == 0 {
            return Err(EngineError::ConfigError(
                "Indicator periods must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.oversold) {
            return Err(EngineError::ConfigError(format!(
                "Oversold threshold {} outside 0..=100",
                self.oversold
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MonitorSettings {
    pub tickers: Vec<String>,
    pub available_tickers: Vec<String>,
    pub lookback_days: u32,
    pub interval: TimeFrame,
    pub show_chart: bool,
    pub chart_window: usize,
    pub indicators: IndicatorParams,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        MonitorSettings {
            tickers: vec!["PETR4.SA".to_string(), "VALE3.SA".to_string()],
            available_tickers: ["PETR4.SA", "VALE3.SA", "ITUB4.SA", "WEGE3.SA", "BBDC4.SA"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            lookback_days: 90,
            interval: TimeFrame::Day1,
            show_chart: false,
            chart_window: 30,
            indicators: IndicatorParams::default(),
        }
    }
}

impl MonitorSettings {
    pub fn lookback(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.lookback_days))
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.lookback_days == 0 {
            return Err(EngineError::ConfigError("lookback_days must be greater than 0".to_string()));
        }
        self.indicators.validate()
    }
}
