use anyhow::Result;
use engine::data::{CsvDirectoryProvider, PriceProvider, YahooFinanceProvider};
use engine::notify::{AlertNotifier, LogNotifier, WebhookNotifier};
use engine::MonitorService;
use std::time::Duration;

use crate::config::{AppConfig, NotificationConfig, ProviderConfig};

pub type DynProvider = Box<dyn PriceProvider>;

pub fn build_provider(config: &ProviderConfig) -> Result<DynProvider> {
    let provider: DynProvider = match config {
        ProviderConfig::Yahoo { base_url, timeout_secs } => {
            tracing::info!(%base_url, "Using Yahoo Finance price provider");
            Box::new(YahooFinanceProvider::new(base_url.clone(), Duration::from_secs(*timeout_secs))?)
        }
        ProviderConfig::Csv { directory } => {
            tracing::info!(directory = %directory.display(), "Using B3 CSV price provider");
            Box::new(CsvDirectoryProvider::new(directory.clone()))
        }
    };
    Ok(provider)
}

/// Without a webhook configured, alerts only go to the log.
pub fn build_notifier(config: Option<&NotificationConfig>) -> Result<Box<dyn AlertNotifier>> {
    match config {
        Some(cfg) => Ok(Box::new(WebhookNotifier::new(
            cfg.webhook_url.clone(),
            cfg.subject.clone(),
            cfg.recipients.clone(),
            Duration::from_secs(cfg.timeout_secs),
        )?)),
        None => Ok(Box::new(LogNotifier)),
    }
}

pub fn build_service(config: &AppConfig) -> Result<MonitorService<DynProvider>> {
    let provider = build_provider(&config.provider)?;
    Ok(MonitorService::new(provider, config.monitor.clone())?)
}
