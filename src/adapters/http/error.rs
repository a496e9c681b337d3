//! Error and pass-through responses shared by the relay endpoints.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::checkout::CheckoutError;
use crate::ports::PlatformResponse;

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    pub error_code: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            error_code: error_code.into(),
        }
    }
}

/// API error type that converts checkout errors to HTTP responses.
#[derive(Debug)]
pub struct CheckoutApiError(CheckoutError);

impl From<CheckoutError> for CheckoutApiError {
    fn from(err: CheckoutError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for CheckoutApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CheckoutError::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for CheckoutApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CheckoutError::EmptyCart | CheckoutError::ValidationFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            CheckoutError::InvalidWebhookSignature => StatusCode::UNAUTHORIZED,
            CheckoutError::NotConfigured(_) | CheckoutError::PlatformFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            error!(error = %self.0, code = self.0.code(), "request failed");
        }

        let body = ErrorResponse::new(self.0.code(), self.0.to_string());
        (status, Json(body)).into_response()
    }
}

/// The platform's answer, forwarded with its own status code.
#[derive(Debug)]
pub struct PlatformReply(pub PlatformResponse);

impl IntoResponse for PlatformReply {
    fn into_response(self) -> Response {
        match StatusCode::from_u16(self.0.status) {
            Ok(status) => (status, Json(self.0.body)).into_response(),
            Err(_) => {
                error!(status = self.0.status, "platform answered with an invalid status");
                let body = ErrorResponse::new(
                    "PLATFORM_ERROR",
                    format!("platform answered with status {}", self.0.status),
                );
                (StatusCode::BAD_GATEWAY, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = CheckoutApiError::from(CheckoutError::EmptyCart).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn bad_signature_maps_to_unauthorized() {
        let response = CheckoutApiError::from(CheckoutError::InvalidWebhookSignature).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn platform_failure_maps_to_internal_error() {
        let response =
            CheckoutApiError::from(CheckoutError::platform_failed("timed out")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn platform_status_is_forwarded() {
        let reply = PlatformReply(PlatformResponse::new(422, json!({ "name": "UNPROCESSABLE_ENTITY" })));
        assert_eq!(reply.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn out_of_range_status_becomes_bad_gateway() {
        let reply = PlatformReply(PlatformResponse::new(1000, json!({})));
        assert_eq!(reply.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
