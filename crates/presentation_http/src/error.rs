//! API error mapping
//!
//! Translates forecast failures into the HTTP statuses and body
//! shapes the API exposes. Every status decision lives in the
//! `IntoResponse` impl, as a direct match on the error discriminant.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use integration_cwa::ForecastError;
use serde::Serialize;
use thiserror::Error;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Stable error category
    pub error: String,
    /// Human-readable description
    pub message: String,
    /// Upstream response body, passed through for transparency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Forecast(err) = self;

        let (status, error, message, details) = match err {
            ForecastError::Configuration(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "server configuration error",
                message,
                None,
            ),
            ForecastError::Upstream {
                status,
                message,
                body,
            } => (
                // Pass the provider's own error status through; a
                // transport failure or a 2xx with an unusable body
                // surfaces as a bad gateway
                status
                    .filter(|code| *code >= 400)
                    .and_then(|code| StatusCode::from_u16(code).ok())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                "upstream API error",
                message,
                body,
            ),
            err @ ForecastError::LocalityNotFound { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "server error",
                err.to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
