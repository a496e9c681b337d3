//! HTTP handlers for order endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::adapters::http::error::{CheckoutApiError, PlatformReply};
use crate::adapters::http::state::RelayAppState;
use crate::application::handlers::SettleOrderCommand;
use crate::domain::checkout::OrderIntent;

use super::dto::CreateOrderRequest;

/// POST /api/orders - Create an order from the cart
pub async fn create_order(
    State(state): State<RelayAppState>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<PlatformReply, CheckoutApiError> {
    let Json(request) = body?;
    let cmd = request.into_command(false)?;
    let response = state.create_order_handler().handle(cmd).await?;
    Ok(PlatformReply(response))
}

/// POST /api/checkout-orders - Create an order with shipping options and the
/// shipping callback registered
pub async fn create_checkout_order(
    State(state): State<RelayAppState>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<PlatformReply, CheckoutApiError> {
    let Json(request) = body?;
    let cmd = request.into_command(true)?;
    let response = state.create_order_handler().handle(cmd).await?;
    Ok(PlatformReply(response))
}

/// POST /api/orders/:order_id/capture - Capture an approved order
pub async fn capture_order(
    State(state): State<RelayAppState>,
    Path(order_id): Path<String>,
) -> Result<PlatformReply, CheckoutApiError> {
    settle(state, order_id, OrderIntent::Capture).await
}

/// POST /api/orders/:order_id/authorize - Authorize an approved order
pub async fn authorize_order(
    State(state): State<RelayAppState>,
    Path(order_id): Path<String>,
) -> Result<PlatformReply, CheckoutApiError> {
    settle(state, order_id, OrderIntent::Authorize).await
}

async fn settle(
    state: RelayAppState,
    order_id: String,
    intent: OrderIntent,
) -> Result<PlatformReply, CheckoutApiError> {
    let cmd = SettleOrderCommand { order_id, intent };
    let response = state.settle_order_handler().handle(cmd).await?;
    Ok(PlatformReply(response))
}
