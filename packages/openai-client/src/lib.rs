//! Pure OpenAI REST API client.
//!
//! A minimal client for the OpenAI chat completions API with no
//! domain-specific logic, reduced to the structured-output surface: send a
//! prompt pair plus a JSON schema, get guaranteed-valid JSON back.
//!
//! # Type-safe structured output
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use openai_client::OpenAIClient;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Correction {
//!     corrected: String,
//! }
//!
//! let client = OpenAIClient::from_env()?;
//!
//! // Schema generated automatically from the type
//! let correction: Correction = client
//!     .extract::<Correction>("gpt-4o-mini", system_prompt, user_prompt)
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{OpenAIError, Result};
pub use schema::StructuredOutput;
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Pure OpenAI API client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| OpenAIError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Structured output with a JSON schema.
    ///
    /// Uses OpenAI's `json_schema` response format for guaranteed valid JSON.
    /// Returns the raw JSON string; prefer [`Self::extract`] for typed output.
    pub async fn structured_output(&self, request: StructuredRequest) -> Result<String> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI structured output error");
            return Err(OpenAIError::Api(format!(
                "OpenAI structured output error: {}",
                error_text
            )));
        }

        let raw: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        raw.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| OpenAIError::Api("No response from OpenAI".into()))
    }

    /// Type-safe structured output extraction.
    ///
    /// Generates a JSON schema from `T` with `schemars`, sends it to OpenAI,
    /// and deserializes the response into `T`.
    pub async fn extract<T: StructuredOutput>(
        &self,
        model: &str,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Result<T> {
        let schema = T::openai_schema();

        debug!(
            type_name = T::type_name(),
            "Generated OpenAI schema for extraction"
        );

        let request = StructuredRequest::new(model, system_prompt, user_prompt, schema);
        let json_str = self.structured_output(request).await?;

        serde_json::from_str(&json_str)
            .map_err(|e| OpenAIError::Parse(format!("Failed to deserialize response: {}", e)))
    }
}
