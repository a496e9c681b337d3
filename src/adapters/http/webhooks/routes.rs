//! Axum router configuration for webhooks.

use axum::{routing::post, Router};

use super::handlers::handle_webhook;
use crate::adapters::http::state::RelayAppState;

/// Create the webhook router.
///
/// # Routes
/// - `POST /webhooks` - Platform event deliveries
pub fn webhook_routes() -> Router<RelayAppState> {
    Router::new().route("/webhooks", post(handle_webhook))
}
