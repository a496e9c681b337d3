//! HTTP handler for the shipping recalculation callback.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};

use crate::domain::shipping::ShippingError;

use super::dto::{ShippingCallbackRequest, ShippingCallbackResponse, ShippingRejectionResponse};
use crate::adapters::http::state::RelayAppState;

/// POST /api/shipping-callback - Recalculate the breakdown for a shipping change
///
/// The body is read raw so that unparseable JSON answers like every other
/// malformed payload.
pub async fn shipping_callback(
    State(state): State<RelayAppState>,
    body: Bytes,
) -> Result<Json<ShippingCallbackResponse>, ShippingApiError> {
    let request = ShippingCallbackRequest::from_slice(&body)
        .map_err(|e| ShippingError::malformed(e.to_string()))?;

    let result = state.recalculate_shipping_handler().handle(request.into_command())?;
    Ok(Json(ShippingCallbackResponse::from(result)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for the callback.
///
/// Rejections use the platform's error shape; everything else is an opaque
/// plain-text 500.
#[derive(Debug)]
pub struct ShippingApiError(ShippingError);

impl From<ShippingError> for ShippingApiError {
    fn from(err: ShippingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ShippingApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            ShippingError::UnsupportedCountry { country } => {
                info!(country = %country, "shipping destination rejected");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ShippingRejectionResponse::country_error()),
                )
                    .into_response()
            }
            ShippingError::MalformedPayload(_) => {
                error!(error = %self.0, "shipping callback failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
            }
        }
    }
}
