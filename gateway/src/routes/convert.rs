//! Currency conversion route.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use fxgate_protocol::ConversionRequest;

use crate::{ApiError, AppState};

/// Request body for `POST /convert`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    /// Currency to convert into.
    pub base_currency: String,
    /// Currency the amount is expressed in.
    pub source_currency: String,
    /// Amount to convert.
    pub transfer_amount: f64,
}

/// Response body for `POST /convert`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub converted_amount: f64,
}

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/convert", post(convert))
}

/// POST `/convert` - Convert an amount through the converter service.
///
/// The body is decoded before any RPC is made; a malformed body never
/// reaches the converter.
async fn convert(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConvertResponse>, ApiError> {
    let request: ConvertRequest = serde_json::from_slice(&body)?;

    let response = state
        .client
        .convert(ConversionRequest::new(
            request.base_currency,
            request.source_currency,
            request.transfer_amount,
        ))
        .await?;

    Ok(Json(ConvertResponse {
        converted_amount: response.converted_amount,
    }))
}
