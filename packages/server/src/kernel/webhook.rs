//! Spreadsheet webhook relay.
//!
//! Infrastructure implementation of [`BaseLeadRelay`]: forwards the enquiry
//! as a JSON body to the fixed webhook URL and returns whatever JSON the
//! remote answers with. All-or-nothing, one attempt, no backoff.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::BaseLeadRelay;
use crate::domains::leads::validate::LeadSubmission;

/// HTTP client for the spreadsheet webhook.
pub struct WebhookLeadRelay {
    url: String,
    client: reqwest::Client,
}

impl WebhookLeadRelay {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl BaseLeadRelay for WebhookLeadRelay {
    async fn deliver(&self, lead: &LeadSubmission) -> Result<serde_json::Value> {
        let response = self
            .client
            .post(&self.url)
            .json(lead)
            .send()
            .await
            .context("Failed to send lead to webhook")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Webhook error {}: {}", status, body);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse webhook response")?;

        debug!(city = %lead.city, "Lead relayed to webhook");

        Ok(data)
    }
}
