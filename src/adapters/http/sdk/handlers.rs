//! HTTP handler for browser SDK tokens.

use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::CheckoutApiError;
use crate::adapters::http::state::RelayAppState;

use super::dto::ClientTokenResponse;

/// GET /api/client-token - Token for the card fields and Fastlane components
pub async fn client_token(
    State(state): State<RelayAppState>,
) -> Result<Json<ClientTokenResponse>, CheckoutApiError> {
    let token = state.client_token_handler().handle().await?;
    Ok(Json(token.into()))
}
