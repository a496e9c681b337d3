//! HTTP handler for platform webhooks.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;

use crate::adapters::http::error::CheckoutApiError;
use crate::adapters::http::state::RelayAppState;
use crate::application::handlers::HandleWebhookCommand;
use crate::domain::checkout::CheckoutError;

use super::dto::{transmission_from_headers, WebhookAckResponse};

/// POST /api/webhooks - Verify and acknowledge a platform event
///
/// No session auth: authenticity comes from the platform's signature check.
pub async fn handle_webhook(
    State(state): State<RelayAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAckResponse>, CheckoutApiError> {
    let transmission = transmission_from_headers(&headers)?;
    let event: Value = serde_json::from_slice(&body)
        .map_err(|e| CheckoutError::validation("body", format!("webhook body is not JSON: {}", e)))?;

    let result = state
        .webhook_handler()
        .handle(HandleWebhookCommand {
            transmission,
            event,
        })
        .await?;

    Ok(Json(WebhookAckResponse {
        received: true,
        event_id: result.event_id,
    }))
}
