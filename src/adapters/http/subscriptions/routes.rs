//! Axum router configuration for subscription endpoints.

use axum::{routing::post, Router};

use super::handlers::create_plan;
use crate::adapters::http::state::RelayAppState;

/// Create the subscriptions router.
///
/// # Routes
/// - `POST /subscriptions/plan` - Create a product and billing plan
pub fn subscription_routes() -> Router<RelayAppState> {
    Router::new().route("/subscriptions/plan", post(create_plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::paypal::{MockEndpoint, MockPaymentPlatform};

    fn plan_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/subscriptions/plan")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn plan_response_is_forwarded() {
        let mock = MockPaymentPlatform::new();
        let app = subscription_routes().with_state(RelayAppState::new(Arc::new(mock.clone())));

        let response = app
            .oneshot(plan_request(json!({
                "product_name": "Coffee Club",
                "plan_name": "Weekly beans",
                "price": "7.5",
                "interval": "WEEK"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["product_id"], "PROD-XXCD1234QWER65782");

        let plan = &mock.calls_to(MockEndpoint::CreatePlan)[0];
        let sent = plan.body.as_ref().unwrap();
        assert_eq!(sent["billing_cycles"][0]["frequency"]["interval_unit"], "WEEK");
        assert_eq!(sent["billing_cycles"][0]["pricing_scheme"]["fixed_price"]["value"], "7.50");
    }

    #[tokio::test]
    async fn unparseable_price_is_bad_request() {
        let mock = MockPaymentPlatform::new();
        let app = subscription_routes().with_state(RelayAppState::new(Arc::new(mock.clone())));

        let response = app
            .oneshot(plan_request(json!({
                "product_name": "Coffee Club",
                "plan_name": "Weekly beans",
                "price": "cheap"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(mock.calls().is_empty());
    }
}
