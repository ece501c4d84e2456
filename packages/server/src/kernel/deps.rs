//! Server dependencies (using traits for testability)
//!
//! Central dependency container for routes and the form flow. Both remote
//! capabilities sit behind trait objects so tests can substitute mocks.

use std::sync::Arc;

use anyhow::Result;
use openai_client::OpenAIClient;

use crate::config::Config;
use crate::kernel::{
    BaseAddressNormalizer, BaseLeadRelay, OpenAIAddressNormalizer, WebhookLeadRelay,
};

/// Dependencies shared by the HTTP handlers.
#[derive(Clone)]
pub struct ServerDeps {
    pub normalizer: Arc<dyn BaseAddressNormalizer>,
    pub relay: Arc<dyn BaseLeadRelay>,
}

impl ServerDeps {
    pub fn new(normalizer: Arc<dyn BaseAddressNormalizer>, relay: Arc<dyn BaseLeadRelay>) -> Self {
        Self { normalizer, relay }
    }

    /// Wire up the production capabilities from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let openai = OpenAIClient::new(config.openai_api_key.clone());
        let normalizer = Arc::new(OpenAIAddressNormalizer::new(
            openai,
            config.openai_model.clone(),
        ));
        let relay = Arc::new(WebhookLeadRelay::new(config.lead_webhook_url.clone())?);

        Ok(Self::new(normalizer, relay))
    }
}
