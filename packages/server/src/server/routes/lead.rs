//! Lead relay endpoint.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::domains::leads::{validate, FieldError, LeadSubmission};
use crate::server::app::AppState;

/// Response for `POST /api/lead`.
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Relay a lead enquiry to the spreadsheet webhook.
///
/// Validates server-side (mirroring the form's inline checks), forwards the
/// body verbatim on success, and answers:
/// - 200 `{success: true, data}` with the webhook's parsed response
/// - 422 `{success: false, errors}` on validation failure
/// - 500 `{success: false}` on any relay error
pub async fn lead_handler(
    State(state): State<AppState>,
    Json(lead): Json<LeadSubmission>,
) -> (StatusCode, Json<LeadResponse>) {
    let errors = validate(&lead);
    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(LeadResponse {
                success: false,
                data: None,
                errors: Some(errors),
            }),
        );
    }

    match state.deps.relay.deliver(&lead).await {
        Ok(data) => {
            info!(city = %lead.city, "Lead enquiry relayed");
            (
                StatusCode::OK,
                Json(LeadResponse {
                    success: true,
                    data: Some(data),
                    errors: None,
                }),
            )
        }
        Err(e) => {
            warn!(error = %e, "Lead relay failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LeadResponse {
                    success: false,
                    data: None,
                    errors: None,
                }),
            )
        }
    }
}
