//! Alert delivery. Transports report success as a boolean; a failed send is
//! logged and never aborts the run.

pub mod webhook;

pub use webhook::WebhookNotifier;

use async_trait::async_trait;

use crate::services::monitor_service::MonitorReport;

#[async_trait]
pub trait AlertNotifier: Send + Sync {
    async fn send_alerts(&self, body: &str) -> bool;
}

/// Writes alerts to the log instead of sending them anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl AlertNotifier for LogNotifier {
    async fn send_alerts(&self, body: &str) -> bool {
        for line in body.lines() {
            tracing::info!(alert = line, "Buy alert");
        }
        true
    }
}

/// Sends the report's alerts, if any. `None` means there was nothing to send.
pub async fn notify_alerts(notifier: &dyn AlertNotifier, report: &MonitorReport) -> Option<bool> {
    if !report.has_alerts() {
        return None;
    }
    let delivered = notifier.send_alerts(&report.alert_body()).await;
    if delivered {
        tracing::info!(alerts = report.alerts().len(), "Alert notification sent");
    } else {
        tracing::error!(alerts = report.alerts().len(), "Alert notification failed");
    }
    Some(delivered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{SignalOutcome, SignalResult};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AlertNotifier for Recording {
        async fn send_alerts(&self, body: &str) -> bool {
            self.sent.lock().unwrap().push(body.to_string());
            true
        }
    }

    fn result(ticker: &str, alert: bool) -> SignalOutcome {
        SignalOutcome::Evaluated(SignalResult {
            ticker: ticker.to_string(),
            close: 50.5,
            rsi: 28.5,
            ema: 49.0,
            momentum_cross: alert,
            trend: true,
            volume_ok: true,
            reversal: true,
            alert,
        })
    }

    #[tokio::test]
    async fn nothing_sent_without_alerts() {
        let notifier = Recording::default();
        let report = MonitorReport {
            outcomes: vec![result("PETR4.SA", false)],
            ..MonitorReport::default()
        };
        assert_eq!(notify_alerts(&notifier, &report).await, None);
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn alerts_are_joined_by_newline() {
        let notifier = Recording::default();
        let report = MonitorReport {
            outcomes: vec![result("PETR4.SA", true), result("VALE3.SA", false), result("ITUB4.SA", true)],
            ..MonitorReport::default()
        };
        assert_eq!(notify_alerts(&notifier, &report).await, Some(true));
        let sent = notifier.sent.lock().unwrap();
        assert_eq!(
            sent[0],
            "PETR4.SA | IFR: 28.50 | Preço: R$50.50\nITUB4.SA | IFR: 28.50 | Preço: R$50.50"
        );
    }

    #[tokio::test]
    async fn log_notifier_always_succeeds() {
        assert!(LogNotifier.send_alerts("PETR4.SA | IFR: 28.50 | Preço: R$50.50").await);
    }
}
