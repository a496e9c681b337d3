//! Axum router configuration for order endpoints.

use axum::{routing::post, Router};

use super::handlers::{authorize_order, capture_order, create_checkout_order, create_order};
use crate::adapters::http::state::RelayAppState;

/// Create the orders router.
///
/// # Routes
/// - `POST /orders` - Create an order
/// - `POST /checkout-orders` - Create an order with shipping callback
/// - `POST /orders/:order_id/capture` - Capture an approved order
/// - `POST /orders/:order_id/authorize` - Authorize an approved order
pub fn order_routes() -> Router<RelayAppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/checkout-orders", post(create_checkout_order))
        .route("/orders/:order_id/capture", post(capture_order))
        .route("/orders/:order_id/authorize", post(authorize_order))
}
