//! Rate administration route.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use fxgate_protocol::SetRateRequest;

use crate::{ApiError, AppState};

/// Request body for `POST /rates`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRateRequest {
    pub from_currency: String,
    pub to_currency: String,
    /// Units of `to_currency` per unit of `from_currency`.
    pub rate: f64,
}

/// Response body for `POST /rates`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    pub from_currency: String,
    pub to_currency: String,
    pub rate: f64,
    pub reciprocal_rate: f64,
}

/// Creates the rate routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/rates", post(create_rate))
}

/// POST `/rates` - Store a rate and its reciprocal.
async fn create_rate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RateResponse>, ApiError> {
    let request: CreateRateRequest = serde_json::from_slice(&body)?;

    let ack = state
        .client
        .set_rate(SetRateRequest {
            from_currency: request.from_currency,
            to_currency: request.to_currency,
            rate: request.rate,
        })
        .await?;

    Ok(Json(RateResponse {
        from_currency: ack.from_currency,
        to_currency: ack.to_currency,
        rate: ack.rate,
        reciprocal_rate: ack.reciprocal_rate,
    }))
}
