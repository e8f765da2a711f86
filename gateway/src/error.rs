//! HTTP rendering of gateway failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use fxgate_common::FxGateError;

/// Error returned by gateway handlers.
#[derive(Debug)]
pub struct ApiError(pub FxGateError);

impl From<FxGateError> for ApiError {
    fn from(err: FxGateError) -> Self {
        Self(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self(FxGateError::MalformedRequest(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
        } else {
            warn!(error = %self.0, code = self.0.error_code(), "Request rejected");
        }

        let body = json!({
            "error": self.0.error_code(),
            "message": self.0.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
