//! End-to-end tests for `POST /api/shipping-callback` through the full app
//! (routing, layers, and error mapping).

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use proptest::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use checkout_relay::adapters::{relay_app, MockPaymentPlatform, RelayAppState};
use checkout_relay::domain::shipping::{CountryCode, ShippingPolicy};

fn app() -> Router {
    let state = RelayAppState::new(Arc::new(MockPaymentPlatform::new()));
    relay_app(state, Duration::from_secs(30))
}

fn callback_payload(country: &str, option_id: Option<&str>, item_total: &str) -> Value {
    let mut payload = json!({
        "id": "5O190127TN364715T",
        "shipping_address": {
            "country_code": country,
            "admin_area_1": "TX",
            "admin_area_2": "Austin",
            "postal_code": "73301"
        },
        "purchase_units": [{
            "reference_id": "default",
            "amount": {
                "currency_code": "USD",
                "value": item_total,
                "breakdown": {
                    "item_total": { "currency_code": "USD", "value": item_total },
                    "shipping": { "currency_code": "USD", "value": "0.00" }
                }
            },
            "shipping": { "name": { "full_name": "John Doe" } }
        }]
    });
    if let Some(id) = option_id {
        payload["shipping_option"] = json!({
            "id": id,
            "label": "whatever the buyer saw",
            "type": "SHIPPING",
            "amount": { "currency_code": "USD", "value": "123.45" }
        });
    }
    payload
}

async fn post(app: Router, body: String) -> (StatusCode, String, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/shipping-callback")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
    (status, content_type, bytes)
}

async fn post_json(body: Value) -> (StatusCode, Value) {
    let (status, _, bytes) = post(app(), body.to_string()).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn free_option_keeps_item_total() {
    let (status, body) = post_json(callback_payload("US", Some("1"), "100.00")).await;

    assert_eq!(status, StatusCode::OK);
    let unit = &body["purchase_units"][0];
    assert_eq!(unit["amount"]["value"], "100.00");
    assert_eq!(unit["amount"]["breakdown"]["shipping"]["value"], "0.00");
    assert_eq!(unit["shipping_options"][0]["id"], "1");
    assert_eq!(unit["shipping_options"][0]["label"], "Free Shipping");
    assert_eq!(unit["shipping_options"][0]["selected"], true);
}

#[tokio::test]
async fn express_option_adds_ten() {
    let (status, body) = post_json(callback_payload("US", Some("2"), "100.00")).await;

    assert_eq!(status, StatusCode::OK);
    let unit = &body["purchase_units"][0];
    assert_eq!(unit["amount"]["value"], "110.00");
    assert_eq!(unit["amount"]["breakdown"]["item_total"]["value"], "100.00");
    assert_eq!(unit["amount"]["breakdown"]["shipping"]["value"], "10.00");
    assert_eq!(unit["shipping_options"][1]["label"], "Express Shipping");
    assert_eq!(unit["shipping_options"][1]["selected"], true);
}

#[tokio::test]
async fn incoming_option_amount_is_ignored() {
    // The table decides the amount, not what the platform echoes back.
    let (_, body) = post_json(callback_payload("US", Some("1"), "20.00")).await;
    assert_eq!(body["purchase_units"][0]["amount"]["breakdown"]["shipping"]["value"], "0.00");
}

#[tokio::test]
async fn unknown_option_id_is_charged_as_express() {
    let (status, body) = post_json(callback_payload("US", Some("7"), "15.00")).await;

    assert_eq!(status, StatusCode::OK);
    let unit = &body["purchase_units"][0];
    assert_eq!(unit["amount"]["value"], "25.00");
    assert_eq!(unit["shipping_options"][1]["selected"], true);
}

#[tokio::test]
async fn absent_option_is_charged_as_express() {
    let (status, body) = post_json(callback_payload("US", None, "15.00")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["purchase_units"][0]["amount"]["value"], "25.00");
}

#[tokio::test]
async fn item_total_is_never_recomputed() {
    // The breakdown's item_total wins over the purchase unit's own value.
    let mut payload = callback_payload("US", Some("1"), "42.10");
    payload["purchase_units"][0]["amount"]["value"] = json!("999.99");
    let (_, body) = post_json(payload).await;
    assert_eq!(body["purchase_units"][0]["amount"]["value"], "42.10");
}

#[tokio::test]
async fn order_id_is_echoed() {
    let (_, body) = post_json(callback_payload("US", Some("1"), "1.00")).await;
    assert_eq!(body["id"], "5O190127TN364715T");
    assert_eq!(body["purchase_units"][0]["reference_id"], "default");
}

#[tokio::test]
async fn non_us_countries_get_country_error() {
    for country in ["CA", "DE", "GB", "MX"] {
        let (status, body) = post_json(callback_payload(country, Some("1"), "10.00")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "country {}", country);
        assert_eq!(body["name"], "UNPROCESSABLE_ENTITY");
        assert_eq!(body["details"][0]["issue"], "COUNTRY_ERROR");
    }
}

#[tokio::test]
async fn non_us_country_wins_over_missing_fields() {
    let (status, body) = post_json(json!({ "shipping_address": { "country_code": "CA" } })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["issue"], "COUNTRY_ERROR");
}

#[tokio::test]
async fn non_us_country_wins_over_mistyped_fields() {
    let mut mistyped_units = callback_payload("CA", Some("1"), "10.00");
    mistyped_units["purchase_units"] = json!("oops");

    let mut numeric_option = callback_payload("DE", Some("1"), "10.00");
    numeric_option["shipping_option"]["id"] = json!(2);

    let mut numeric_id = callback_payload("CA", Some("2"), "10.00");
    numeric_id["id"] = json!(12345);

    let mut object_total = callback_payload("GB", None, "10.00");
    object_total["purchase_units"][0]["amount"]["breakdown"]["item_total"] = json!(true);

    for payload in [mistyped_units, numeric_option, numeric_id, object_total] {
        let (status, body) = post_json(payload.clone()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "payload {}", payload);
        assert_eq!(body["details"][0]["issue"], "COUNTRY_ERROR");
    }
}

#[tokio::test]
async fn numeric_option_id_is_resolved_like_its_text() {
    let mut payload = callback_payload("US", None, "20.00");
    payload["shipping_option"] = json!({ "id": 1 });

    let (status, body) = post_json(payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["purchase_units"][0]["amount"]["value"], "20.00");
}

#[tokio::test]
async fn missing_purchase_units_is_text_500() {
    let mut payload = callback_payload("US", Some("1"), "10.00");
    payload.as_object_mut().unwrap().remove("purchase_units");

    let (status, content_type, bytes) = post(app(), payload.to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.starts_with("text/plain"));
    assert!(String::from_utf8(bytes).unwrap().contains("purchase_units"));
}

#[tokio::test]
async fn missing_shipping_address_is_500() {
    let mut payload = callback_payload("US", Some("1"), "10.00");
    payload.as_object_mut().unwrap().remove("shipping_address");

    let (status, _, _) = post(app(), payload.to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn invalid_item_total_is_500() {
    for total in ["abc", "-3.00", ""] {
        let (status, content_type, _) =
            post(app(), callback_payload("US", Some("1"), total).to_string()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "item_total {:?}", total);
        assert!(content_type.starts_with("text/plain"));
    }
}

#[tokio::test]
async fn unparseable_body_is_500() {
    let (status, content_type, bytes) = post(app(), "{\"id\": ".to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.starts_with("text/plain"));
    assert!(!bytes.is_empty());
}

#[tokio::test]
async fn server_keeps_serving_after_a_failure() {
    let app = app();
    let (status, _, _) = post(app.clone(), "garbage".to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _, _) = post(app, callback_payload("US", Some("2"), "5.00").to_string()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn identical_input_gives_identical_output() {
    let payload = callback_payload("US", Some("2"), "73.19").to_string();
    let (_, _, first) = post(app(), payload.clone()).await;
    let (_, _, second) = post(app(), payload).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn configured_country_is_enforced() {
    let state = RelayAppState::new(Arc::new(MockPaymentPlatform::new()))
        .with_shipping_policy(ShippingPolicy::new(CountryCode::new("CA").unwrap()));
    let app = relay_app(state, Duration::from_secs(30));

    let (status, _, _) = post(app.clone(), callback_payload("US", Some("1"), "5.00").to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _, _) = post(app, callback_payload("CA", Some("1"), "5.00").to_string()).await;
    assert_eq!(status, StatusCode::OK);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn total_is_item_total_plus_shipping(cents in 0u32..10_000_000, express in any::<bool>()) {
        let item_total = format!("{}.{:02}", cents / 100, cents % 100);
        let option = if express { "2" } else { "1" };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let (status, body) =
            runtime.block_on(post_json(callback_payload("US", Some(option), &item_total)));

        prop_assert_eq!(status, StatusCode::OK);
        let unit = &body["purchase_units"][0];
        let expected_cents = cents + if express { 1_000 } else { 0 };
        let expected = format!("{}.{:02}", expected_cents / 100, expected_cents % 100);
        prop_assert_eq!(unit["amount"]["value"].as_str(), Some(expected.as_str()));

        let selected: Vec<&Value> = unit["shipping_options"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|o| o["selected"] == true)
            .collect();
        prop_assert_eq!(selected.len(), 1);
        prop_assert_eq!(selected[0]["id"].as_str(), Some(option));
    }
}
