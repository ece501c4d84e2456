//! Address correction endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::server::app::AppState;

/// Inputs shorter than this are obviously incomplete; skip the LLM call.
const MIN_CORRECTABLE_LENGTH: usize = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectAddressRequest {
    pub address_input: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectAddressResponse {
    pub corrected_address: String,
}

/// Ask the normalizer for a standardized version of a free-text address.
///
/// Always answers 200: an empty `correctedAddress` means the input was
/// unrecognized, too short to bother with, or the normalizer failed.
/// Normalization is an optional enhancement; its errors are logged and
/// swallowed.
pub async fn correct_address_handler(
    State(state): State<AppState>,
    Json(request): Json<CorrectAddressRequest>,
) -> Json<CorrectAddressResponse> {
    if request.address_input.chars().count() < MIN_CORRECTABLE_LENGTH {
        return Json(CorrectAddressResponse {
            corrected_address: String::new(),
        });
    }

    let corrected_address = match state.deps.normalizer.normalize(&request.address_input).await {
        Ok(corrected) => corrected,
        Err(e) => {
            warn!(error = %e, "Address correction failed");
            String::new()
        }
    };

    Json(CorrectAddressResponse { corrected_address })
}
