//! LLM-backed address normalization.
//!
//! Infrastructure implementation of [`BaseAddressNormalizer`] on top of the
//! OpenAI structured-output API. The prompt asks for a single corrected
//! address string, or an empty string when the input is not an address.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::OpenAIClient;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use super::BaseAddressNormalizer;

const SYSTEM_PROMPT: &str = "You are an expert address standardization and correction agent.

Given an address input, your task is to:
1. Correct any typos or errors.
2. Standardize the address format.
3. Provide a single, accurate, and complete corrected address string.
4. If the input is too vague, clearly not an address, or cannot be corrected \
into a meaningful address, return an empty string for the 'correctedAddress' field.";

/// Structured output shape for the correction prompt.
#[derive(Debug, Deserialize, JsonSchema)]
struct AddressCorrection {
    #[serde(rename = "correctedAddress")]
    corrected_address: String,
}

/// OpenAI implementation of address normalization.
pub struct OpenAIAddressNormalizer {
    client: OpenAIClient,
    model: String,
}

impl OpenAIAddressNormalizer {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl BaseAddressNormalizer for OpenAIAddressNormalizer {
    async fn normalize(&self, text: &str) -> Result<String> {
        let user_prompt = format!("Address Input: {}", text);

        let correction: AddressCorrection = self
            .client
            .extract(&self.model, SYSTEM_PROMPT, user_prompt)
            .await
            .context("Address correction call failed")?;

        debug!(
            input_length = text.len(),
            corrected_length = correction.corrected_address.len(),
            "Address correction completed"
        );

        Ok(correction.corrected_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires API key
    async fn corrects_a_real_address() {
        let client =
            OpenAIClient::from_env().expect("OPENAI_API_KEY must be set for integration tests");
        let normalizer = OpenAIAddressNormalizer::new(client, "gpt-4o-mini");

        let corrected = normalizer
            .normalize("1600 pensylvania avenu washington dc")
            .await
            .expect("correction should succeed");

        assert!(corrected.to_lowercase().contains("pennsylvania"));
    }

    #[tokio::test]
    #[ignore] // Requires API key
    async fn returns_empty_for_non_address() {
        let client =
            OpenAIClient::from_env().expect("OPENAI_API_KEY must be set for integration tests");
        let normalizer = OpenAIAddressNormalizer::new(client, "gpt-4o-mini");

        let corrected = normalizer
            .normalize("asdf qwerty not an address at all")
            .await
            .expect("correction should succeed");

        assert!(corrected.is_empty());
    }
}
