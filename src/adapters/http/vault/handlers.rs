//! HTTP handlers for vault endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::{CheckoutApiError, PlatformReply};
use crate::adapters::http::state::RelayAppState;

use super::dto::{PaymentTokenRequestBody, SetupTokenRequestBody};

/// POST /api/vault/setup-token - Start saving a payment method
pub async fn create_setup_token(
    State(state): State<RelayAppState>,
    body: Result<Json<SetupTokenRequestBody>, JsonRejection>,
) -> Result<PlatformReply, CheckoutApiError> {
    let Json(request) = body?;
    let response = state.setup_token_handler().handle(request.into()).await?;
    Ok(PlatformReply(response))
}

/// POST /api/vault/payment-token - Exchange an approved setup token
pub async fn create_payment_token(
    State(state): State<RelayAppState>,
    body: Result<Json<PaymentTokenRequestBody>, JsonRejection>,
) -> Result<PlatformReply, CheckoutApiError> {
    let Json(request) = body?;
    let response = state.payment_token_handler().handle(request.into()).await?;
    Ok(PlatformReply(response))
}
