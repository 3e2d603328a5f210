//! Error types of the recommendation service.
//!
//! [`ApiError`] keeps the category of a failure (bad input, token exchange,
//! transport, unexpected payload) while still answering callers with the
//! JSON bodies they already depend on:
//!
//! - `400 {"error": "<message>"}` for validation failures
//! - `500 {"error": "Failed to retrieve data", "details": "<message>"}` for
//!   everything that went wrong upstream

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to retrieve data";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Spotify authentication failed: {0}")]
    UpstreamAuth(String),

    #[error("Spotify request failed: {0}")]
    UpstreamRequest(String),

    #[error("Unexpected Spotify response: {0}")]
    UpstreamSchema(String),
}

impl ApiError {
    pub fn no_seed_artists() -> Self {
        ApiError::Validation("No seed artists provided".to_string())
    }

    /// HTTP status for the error. Upstream failures of every kind are
    /// reported as 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::UpstreamSchema(err.to_string())
        } else {
            ApiError::UpstreamRequest(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::UpstreamSchema(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(message) => json!({ "error": message }),
            _ => json!({
                "error": UPSTREAM_FAILURE_MESSAGE,
                "details": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
