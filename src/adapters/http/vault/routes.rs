//! Axum router configuration for vault endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_payment_token, create_setup_token};
use crate::adapters::http::state::RelayAppState;

/// Create the vault router.
///
/// # Routes
/// - `POST /vault/setup-token` - Create a setup token
/// - `POST /vault/payment-token` - Create a payment token from a setup token
pub fn vault_routes() -> Router<RelayAppState> {
    Router::new()
        .route("/vault/setup-token", post(create_setup_token))
        .route("/vault/payment-token", post(create_payment_token))
}
