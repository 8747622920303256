// Dashboard configuration, loaded from JSON
use anyhow::{bail, Context, Result};
use engine::config::settings::MonitorSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    #[serde(default)]
    pub monitor: MonitorSettings,
    pub provider: ProviderConfig,
    #[serde(default)]
    pub notification: Option<NotificationConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProviderConfig {
    Yahoo {
        #[serde(default = "default_yahoo_url")]
        base_url: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
    Csv {
        directory: PathBuf,
    },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub webhook_url: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_yahoo_url() -> String {
    engine::data::yahoo::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_subject() -> String {
    "Alerta IFR 14 - possíveis compras".to_string()
}

impl AppConfig {
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_json(&config_str).with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    pub fn from_json(config_str: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.monitor.tickers.is_empty() {
            bail!("No tickers selected to monitor");
        }
        if let Some(unknown) = self
            .monitor
            .tickers
            .iter()
            .find(|t| !self.monitor.available_tickers.contains(t))
        {
            bail!("Ticker '{}' is not in available_tickers", unknown);
        }
        self.monitor.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_default_loads() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.monitor.tickers, vec!["PETR4.SA", "VALE3.SA"]);
        assert!(config.monitor.show_chart);
        assert!(matches!(config.provider, ProviderConfig::Yahoo { timeout_secs: 10, .. }));
        assert!(config.notification.is_none());
    }

    #[test]
    fn csv_provider_and_webhook() {
        let config = AppConfig::from_json(
            r#"{
                "version": "1.0.0",
                "monitor": { "tickers": ["WEGE3.SA"] },
                "provider": { "kind": "csv", "directory": "data/b3" },
                "notification": { "webhook_url": "http://localhost:8025/send", "recipients": ["a@b.com"] }
            }"#,
        )
        .unwrap();
        assert_eq!(config.provider, ProviderConfig::Csv { directory: PathBuf::from("data/b3") });
        let notification = config.notification.unwrap();
        assert_eq!(notification.subject, "Alerta IFR 14 - possíveis compras");
        assert_eq!(notification.timeout_secs, 10);
        assert_eq!(config.monitor.lookback_days, 90);
    }

    #[test]
    fn unknown_ticker_is_rejected() {
        let err = AppConfig::from_json(
            r#"{ "version": "1", "monitor": { "tickers": ["AAPL"] }, "provider": { "kind": "yahoo" } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("AAPL"));
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert!(AppConfig::from_json(
            r#"{ "version": "1", "monitor": { "tickers": [] }, "provider": { "kind": "yahoo" } }"#
        )
        .is_err());
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "version": "2", "provider": {{ "kind": "csv", "directory": "/tmp" }} }}"#
        )
        .unwrap();
        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.version, "2");
        assert_eq!(config.monitor.tickers.len(), 2);
    }
}
