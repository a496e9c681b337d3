//! Axum router configuration for SDK support endpoints.

use axum::{routing::get, Router};

use super::handlers::client_token;
use crate::adapters::http::state::RelayAppState;

/// Create the SDK router.
///
/// # Routes
/// - `GET /client-token` - Browser-safe client token
pub fn sdk_routes() -> Router<RelayAppState> {
    Router::new().route("/client-token", get(client_token))
}
