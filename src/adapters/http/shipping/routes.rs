//! Axum router configuration for the shipping callback.

use axum::{routing::post, Router};

use super::handlers::shipping_callback;
use crate::adapters::http::state::RelayAppState;

/// Create the shipping router.
///
/// # Routes
/// - `POST /shipping-callback` - Invoked by the platform when the buyer
///   changes address or shipping option
pub fn shipping_routes() -> Router<RelayAppState> {
    Router::new().route("/shipping-callback", post(shipping_callback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::paypal::MockPaymentPlatform;

    fn app() -> Router {
        let state = RelayAppState::new(Arc::new(MockPaymentPlatform::new()));
        shipping_routes().with_state(state)
    }

    fn callback(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/shipping-callback")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    fn payload(country: &str, option_id: Option<&str>) -> Value {
        let mut body = json!({
            "id": "5O190127TN364715T",
            "shipping_address": {
                "country_code": country,
                "admin_area_1": "CA",
                "admin_area_2": "San Jose",
                "postal_code": "95131"
            },
            "purchase_units": [{
                "reference_id": "default",
                "amount": {
                    "currency_code": "USD",
                    "value": "110.00",
                    "breakdown": {
                        "item_total": { "currency_code": "USD", "value": "100.00" },
                        "shipping": { "currency_code": "USD", "value": "10.00" }
                    }
                }
            }]
        });
        if let Some(id) = option_id {
            body["shipping_option"] = json!({ "id": id, "amount": { "value": "0.00" } });
        }
        body
    }

    async fn send(body: Value) -> (StatusCode, Value) {
        let response = app().oneshot(callback(body.to_string())).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn free_shipping_breakdown() {
        let (status, body) = send(payload("US", Some("1"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "5O190127TN364715T");
        let unit = &body["purchase_units"][0];
        assert_eq!(unit["reference_id"], "default");
        assert_eq!(unit["amount"]["currency_code"], "USD");
        assert_eq!(unit["amount"]["value"], "100.00");
        assert_eq!(unit["amount"]["breakdown"]["item_total"]["value"], "100.00");
        assert_eq!(unit["amount"]["breakdown"]["shipping"]["value"], "0.00");
        assert_eq!(unit["shipping_options"][0]["selected"], true);
        assert_eq!(unit["shipping_options"][1]["selected"], false);
        assert_eq!(unit["shipping_options"][0]["type"], "SHIPPING");
    }

    #[tokio::test]
    async fn missing_option_charges_express() {
        let (status, body) = send(payload("US", None)).await;

        assert_eq!(status, StatusCode::OK);
        let unit = &body["purchase_units"][0];
        assert_eq!(unit["amount"]["value"], "110.00");
        assert_eq!(unit["shipping_options"][1]["id"], "2");
        assert_eq!(unit["shipping_options"][1]["selected"], true);
    }

    #[tokio::test]
    async fn foreign_country_gets_country_error() {
        let (status, body) = send(json!({ "shipping_address": { "country_code": "DE" } })).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["name"], "UNPROCESSABLE_ENTITY");
        assert_eq!(body["details"][0]["issue"], "COUNTRY_ERROR");
    }

    #[tokio::test]
    async fn invalid_json_is_plain_text_500() {
        let response = app().oneshot(callback("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!bytes.is_empty());
    }

    #[tokio::test]
    async fn missing_purchase_units_is_500() {
        let mut body = payload("US", Some("2"));
        body.as_object_mut().unwrap().remove("purchase_units");
        let response = app().oneshot(callback(body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("purchase_units"));
    }
}
