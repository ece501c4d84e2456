use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::DEFAULT_LEAD_WEBHOOK_URL;
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    capabilities: Capabilities,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    /// Model wired into the address normalizer
    address_correction_model: String,
    /// "default" when relaying to the stock webhook, "custom" when overridden
    lead_webhook: String,
}

/// Health check endpoint
///
/// The service is stateless (no database, no queue); if the process answers,
/// it is healthy. Reports which capabilities are configured; the remote ends
/// themselves are only exercised per request.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let lead_webhook = if state.config.lead_webhook_url == DEFAULT_LEAD_WEBHOOK_URL {
        "default"
    } else {
        "custom"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "itlc-site".to_string(),
        capabilities: Capabilities {
            address_correction_model: state.config.openai_model.clone(),
            lead_webhook: lead_webhook.to_string(),
        },
    })
}
