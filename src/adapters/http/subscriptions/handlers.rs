//! HTTP handlers for subscription endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::{CheckoutApiError, PlatformReply};
use crate::adapters::http::state::RelayAppState;

use super::dto::CreatePlanRequest;

/// POST /api/subscriptions/plan - Create a product and billing plan
pub async fn create_plan(
    State(state): State<RelayAppState>,
    body: Result<Json<CreatePlanRequest>, JsonRejection>,
) -> Result<PlatformReply, CheckoutApiError> {
    let Json(request) = body?;
    let cmd = request.into_command()?;
    let response = state.subscription_plan_handler().handle(cmd).await?;
    Ok(PlatformReply(response))
}
