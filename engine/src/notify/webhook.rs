// Posts alert bodies to an HTTP endpoint, typically an e-mail relay
use async_trait::async_trait;
use serde::Serialize;

use super::AlertNotifier;
use crate::error::EngineError;

#[derive(Debug, Serialize)]
struct AlertMessage<'a> {
    subject: &'a str,
    recipients: &'a [String],
    body: &'a str,
}

#[derive(Clone)]
pub struct WebhookNotifier {
    url: String,
    subject: String,
    recipients: Vec<String>,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(
        url: impl Into<String>,
        subject: impl Into<String>,
        recipients: Vec<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, EngineError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(EngineError::ConfigError("Webhook URL is empty".to_string()));
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url,
            subject: subject.into(),
            recipients,
            client,
        })
    }

    async fn post(&self, body: &str) -> Result<(), EngineError> {
        let message = AlertMessage {
            subject: &self.subject,
            recipients: &self.recipients,
            body,
        };
        let response = self.client.post(&self.url).json(&message).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::NotificationError(format!("webhook returned HTTP {}", status)));
        }
        Ok(())
    }
}

#[async_trait]
impl AlertNotifier for WebhookNotifier {
    async fn send_alerts(&self, body: &str) -> bool {
        match self.post(body).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(url = %self.url, error = %e, "Failed to deliver alert notification");
                false
            }
        }
    }
}
