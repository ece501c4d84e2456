use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Default relay target: the spreadsheet webhook that collects enquiries.
pub const DEFAULT_LEAD_WEBHOOK_URL: &str =
    "https://script.google.com/macros/s/AKfycbzrHC2uJIUJl8hdaDk3Wz3vYHN2bzEcIHaSugbJNePkMkBCTIHuXMP304IsMc-0cfo9/exec";

/// Default model for address correction.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openai_api_key: String,
    pub openai_model: String,
    pub lead_webhook_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?,
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            lead_webhook_url: env::var("LEAD_WEBHOOK_URL")
                .unwrap_or_else(|_| DEFAULT_LEAD_WEBHOOK_URL.to_string()),
        })
    }
}

/// Fixed configuration for handler tests.
#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        port: 8080,
        openai_api_key: "sk-test".to_string(),
        openai_model: DEFAULT_OPENAI_MODEL.to_string(),
        lead_webhook_url: DEFAULT_LEAD_WEBHOOK_URL.to_string(),
    }
}
