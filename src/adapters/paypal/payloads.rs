//! Platform wire payloads built from domain requests.

use serde_json::{json, Map, Value};

use crate::domain::checkout::{CheckoutError, OrderDraft, VaultOnSuccess};
use crate::domain::foundation::{Money, CURRENCY_CODE};
use crate::domain::shipping::ShippingOption;
use crate::domain::subscription::SubscriptionPlanRequest;
use crate::domain::vault::{PaymentSourceKind, PaymentTokenRequest, SetupTokenRequest};
use crate::domain::webhook::WebhookTransmission;

/// Callback events the platform forwards to the shipping callback.
const SHIPPING_CALLBACK_EVENTS: [&str; 2] = ["SHIPPING_ADDRESS", "SHIPPING_OPTIONS"];

pub fn money(amount: Money) -> Value {
    json!({ "currency_code": CURRENCY_CODE, "value": amount })
}

pub fn shipping_option(option: &ShippingOption) -> Value {
    json!({
        "id": option.id(),
        "label": option.label(),
        "type": "SHIPPING",
        "selected": option.selected,
        "amount": money(option.amount()),
    })
}

/// `POST /v2/checkout/orders`
pub fn order_body(draft: &OrderDraft) -> Result<Value, CheckoutError> {
    let item_total = draft.item_total()?;
    let total = draft.total()?;

    let mut breakdown = Map::new();
    breakdown.insert("item_total".to_string(), money(item_total));
    if let Some(shipping) = draft.shipping_amount() {
        breakdown.insert("shipping".to_string(), money(shipping));
    }

    let items: Vec<Value> = draft
        .cart
        .items()
        .iter()
        .map(|item| {
            json!({
                "name": item.name,
                "sku": item.sku,
                "quantity": item.quantity.to_string(),
                "unit_amount": money(item.unit_amount),
            })
        })
        .collect();

    let mut purchase_unit = json!({
        "reference_id": "default",
        "amount": {
            "currency_code": CURRENCY_CODE,
            "value": total,
            "breakdown": breakdown,
        },
        "items": items,
    });
    if let Some(shipping) = &draft.shipping {
        let options: Vec<Value> = shipping.options.iter().map(shipping_option).collect();
        purchase_unit["shipping"] = json!({ "options": options });
    }

    let mut body = json!({
        "intent": draft.intent.as_str(),
        "purchase_units": [purchase_unit],
    });
    if let Some(source) = order_payment_source(draft) {
        body["payment_source"] = source;
    }
    Ok(body)
}

/// Card vaulting has no callback configuration; the shipping callback only
/// applies to the wallet source.
fn order_payment_source(draft: &OrderDraft) -> Option<Value> {
    let callback_url = draft
        .shipping
        .as_ref()
        .and_then(|shipping| shipping.callback_url.as_deref());

    match (&draft.vault, callback_url) {
        (None, None) => None,
        (Some(vault), _) if vault.source == PaymentSourceKind::Card => {
            Some(json!({ "card": { "attributes": card_vault_attributes(vault) } }))
        }
        (vault, callback_url) => {
            let mut paypal = Map::new();
            if let Some(url) = callback_url {
                paypal.insert(
                    "experience_context".to_string(),
                    json!({
                        "order_update_callback_config": {
                            "callback_events": SHIPPING_CALLBACK_EVENTS,
                            "callback_url": url,
                        }
                    }),
                );
            }
            if let Some(vault) = vault {
                paypal.insert("attributes".to_string(), wallet_vault_attributes(vault));
            }
            Some(json!({ "paypal": paypal }))
        }
    }
}

fn card_vault_attributes(vault: &VaultOnSuccess) -> Value {
    let mut attributes = json!({
        "vault": { "store_in_vault": "ON_SUCCESS" },
        "verification": { "method": "SCA_WHEN_REQUIRED" },
    });
    if let Some(customer_id) = &vault.customer_id {
        attributes["customer"] = json!({ "id": customer_id });
    }
    attributes
}

fn wallet_vault_attributes(vault: &VaultOnSuccess) -> Value {
    let mut attributes = json!({
        "vault": {
            "store_in_vault": "ON_SUCCESS",
            "usage_type": "MERCHANT",
            "customer_type": "CONSUMER",
        },
    });
    if let Some(customer_id) = &vault.customer_id {
        attributes["customer"] = json!({ "id": customer_id });
    }
    attributes
}

/// `POST /v3/vault/setup-tokens`
pub fn setup_token_body(request: &SetupTokenRequest) -> Value {
    let mut experience_context = Map::new();
    if let Some(url) = &request.return_url {
        experience_context.insert("return_url".to_string(), json!(url));
    }
    if let Some(url) = &request.cancel_url {
        experience_context.insert("cancel_url".to_string(), json!(url));
    }

    let source = match request.source {
        PaymentSourceKind::Card => {
            let mut card = json!({ "verification_method": "SCA_WHEN_REQUIRED" });
            if !experience_context.is_empty() {
                card["experience_context"] = Value::Object(experience_context);
            }
            json!({ "card": card })
        }
        PaymentSourceKind::Paypal => {
            experience_context.insert("shipping_preference".to_string(), json!("NO_SHIPPING"));
            experience_context.insert("vault_instruction".to_string(), json!("ON_PAYER_APPROVAL"));
            json!({
                "paypal": {
                    "usage_type": "MERCHANT",
                    "customer_type": "CONSUMER",
                    "permit_multiple_payment_tokens": false,
                    "experience_context": experience_context,
                }
            })
        }
    };

    let mut body = json!({ "payment_source": source });
    if let Some(customer_id) = &request.customer_id {
        body["customer"] = json!({ "id": customer_id });
    }
    body
}

/// `POST /v3/vault/payment-tokens`
pub fn payment_token_body(request: &PaymentTokenRequest) -> Value {
    json!({
        "payment_source": {
            "token": {
                "id": request.setup_token_id,
                "type": "SETUP_TOKEN",
            }
        }
    })
}

/// `POST /v1/catalogs/products`
pub fn product_body(request: &SubscriptionPlanRequest) -> Value {
    let mut body = json!({
        "name": request.product_name,
        "type": "SERVICE",
    });
    if let Some(description) = &request.description {
        body["description"] = json!(description);
    }
    body
}

/// `POST /v1/billing/plans`
pub fn plan_body(request: &SubscriptionPlanRequest, product_id: &str) -> Value {
    let mut body = json!({
        "product_id": product_id,
        "name": request.plan_name,
        "status": "ACTIVE",
        "billing_cycles": [{
            "frequency": {
                "interval_unit": request.interval.as_str(),
                "interval_count": 1,
            },
            "tenure_type": "REGULAR",
            "sequence": 1,
            "total_cycles": 0,
            "pricing_scheme": { "fixed_price": money(request.price) },
        }],
        "payment_preferences": {
            "auto_bill_outstanding": true,
            "setup_fee_failure_action": "CONTINUE",
            "payment_failure_threshold": 3,
        },
    });
    if let Some(description) = &request.description {
        body["description"] = json!(description);
    }
    body
}

/// `POST /v1/notifications/verify-webhook-signature`
pub fn verify_webhook_body(
    transmission: &WebhookTransmission,
    webhook_id: &str,
    event: &Value,
) -> Value {
    json!({
        "auth_algo": transmission.auth_algo,
        "cert_url": transmission.cert_url,
        "transmission_id": transmission.transmission_id,
        "transmission_sig": transmission.transmission_sig,
        "transmission_time": transmission.transmission_time,
        "webhook_id": webhook_id,
        "webhook_event": event,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::{Cart, CartItem, OrderIntent, ShippingSetup};
    use crate::domain::subscription::BillingInterval;

    fn draft() -> OrderDraft {
        let cart = Cart::new(vec![
            CartItem::new("HAT-1", "Hat", 2, Money::parse("12.50", "unit_amount").unwrap()).unwrap(),
            CartItem::new("SOCK-2", "Socks", 1, Money::parse("4.99", "unit_amount").unwrap()).unwrap(),
        ])
        .unwrap();
        OrderDraft::new(OrderIntent::Capture, cart)
    }

    #[test]
    fn order_body_sums_cart_into_breakdown() {
        let body = order_body(&draft()).unwrap();
        assert_eq!(body["intent"], "CAPTURE");
        let unit = &body["purchase_units"][0];
        assert_eq!(unit["amount"]["currency_code"], "USD");
        assert_eq!(unit["amount"]["value"], "29.99");
        assert_eq!(unit["amount"]["breakdown"]["item_total"]["value"], "29.99");
        assert!(unit["amount"]["breakdown"].get("shipping").is_none());
        assert_eq!(unit["items"][0]["quantity"], "2");
        assert_eq!(unit["items"][1]["unit_amount"]["value"], "4.99");
        assert!(body.get("payment_source").is_none());
    }

    #[test]
    fn shipping_order_carries_options_and_callback() {
        let draft = draft().with_shipping(ShippingSetup::standard(Some(
            "https://shop.example.com/api/shipping-callback".to_string(),
        )));
        let body = order_body(&draft).unwrap();
        let unit = &body["purchase_units"][0];

        assert_eq!(unit["amount"]["value"], "39.99");
        assert_eq!(unit["amount"]["breakdown"]["shipping"]["value"], "10.00");
        assert_eq!(unit["shipping"]["options"][0]["id"], "1");
        assert_eq!(unit["shipping"]["options"][0]["selected"], false);
        assert_eq!(unit["shipping"]["options"][1]["selected"], true);
        assert_eq!(unit["shipping"]["options"][1]["type"], "SHIPPING");

        let callback = &body["payment_source"]["paypal"]["experience_context"]["order_update_callback_config"];
        assert_eq!(callback["callback_url"], "https://shop.example.com/api/shipping-callback");
        assert_eq!(callback["callback_events"][1], "SHIPPING_OPTIONS");
    }

    #[test]
    fn shipping_order_without_callback_url_has_no_payment_source() {
        let body = order_body(&draft().with_shipping(ShippingSetup::standard(None))).unwrap();
        assert!(body.get("payment_source").is_none());
    }

    #[test]
    fn card_vault_order_sets_store_in_vault() {
        let draft = draft().save_payment_method(PaymentSourceKind::Card, Some("cust_1".to_string()));
        let body = order_body(&draft).unwrap();
        let attributes = &body["payment_source"]["card"]["attributes"];
        assert_eq!(attributes["vault"]["store_in_vault"], "ON_SUCCESS");
        assert_eq!(attributes["customer"]["id"], "cust_1");
    }

    #[test]
    fn wallet_vault_order_merges_with_callback() {
        let draft = draft()
            .with_shipping(ShippingSetup::standard(Some("https://cb.example.com".to_string())))
            .save_payment_method(PaymentSourceKind::Paypal, None);
        let body = order_body(&draft).unwrap();
        let paypal = &body["payment_source"]["paypal"];
        assert_eq!(paypal["attributes"]["vault"]["usage_type"], "MERCHANT");
        assert!(paypal["attributes"].get("customer").is_none());
        assert_eq!(
            paypal["experience_context"]["order_update_callback_config"]["callback_url"],
            "https://cb.example.com"
        );
    }

    #[test]
    fn card_setup_token_body() {
        let request = SetupTokenRequest::new(
            PaymentSourceKind::Card,
            Some("cust_9".to_string()),
            None,
            None,
        )
        .unwrap();
        let body = setup_token_body(&request);
        assert_eq!(body["payment_source"]["card"]["verification_method"], "SCA_WHEN_REQUIRED");
        assert!(body["payment_source"]["card"].get("experience_context").is_none());
        assert_eq!(body["customer"]["id"], "cust_9");
    }

    #[test]
    fn wallet_setup_token_body() {
        let request = SetupTokenRequest::new(
            PaymentSourceKind::Paypal,
            None,
            Some("https://shop.example.com/ok".to_string()),
            Some("https://shop.example.com/cancel".to_string()),
        )
        .unwrap();
        let body = setup_token_body(&request);
        let context = &body["payment_source"]["paypal"]["experience_context"];
        assert_eq!(context["return_url"], "https://shop.example.com/ok");
        assert_eq!(context["vault_instruction"], "ON_PAYER_APPROVAL");
        assert!(body.get("customer").is_none());
    }

    #[test]
    fn payment_token_body_references_setup_token() {
        let body = payment_token_body(&PaymentTokenRequest::new("4G4976650J0948357").unwrap());
        assert_eq!(body["payment_source"]["token"]["id"], "4G4976650J0948357");
        assert_eq!(body["payment_source"]["token"]["type"], "SETUP_TOKEN");
    }

    #[test]
    fn plan_body_has_one_regular_cycle() {
        let request = SubscriptionPlanRequest::new(
            "Coffee Club",
            "Monthly beans",
            Some("A bag a month".to_string()),
            Money::parse("14.5", "price").unwrap(),
            BillingInterval::Month,
        )
        .unwrap();

        let product = product_body(&request);
        assert_eq!(product["name"], "Coffee Club");
        assert_eq!(product["type"], "SERVICE");

        let plan = plan_body(&request, "PROD-5FD60555F23244316");
        assert_eq!(plan["product_id"], "PROD-5FD60555F23244316");
        assert_eq!(plan["billing_cycles"][0]["frequency"]["interval_unit"], "MONTH");
        assert_eq!(plan["billing_cycles"][0]["pricing_scheme"]["fixed_price"]["value"], "14.50");
        assert_eq!(plan["description"], "A bag a month");
    }

    #[test]
    fn verify_body_embeds_event_verbatim() {
        let transmission = WebhookTransmission {
            auth_algo: "SHA256withRSA".to_string(),
            cert_url: "https://api.sandbox.paypal.com/v1/notifications/certs/CERT".to_string(),
            transmission_id: "69cd13f0-d67a-11e5-baa3-778b53f4ae55".to_string(),
            transmission_sig: "lmI95Jx3Y9nhR5SJWlHVIWpg4AgFk7n9bCHSRxbrd8A9zrhdu2rMyFrmz".to_string(),
            transmission_time: "2016-02-18T20:01:35Z".to_string(),
        };
        let event = json!({ "id": "WH-1", "event_type": "PAYMENT.CAPTURE.COMPLETED" });
        let body = verify_webhook_body(&transmission, "1JE4291016473214C", &event);
        assert_eq!(body["webhook_id"], "1JE4291016473214C");
        assert_eq!(body["webhook_event"], event);
        assert_eq!(body["auth_algo"], "SHA256withRSA");

        let raw = r#"{"id":"WH-2","event_version":"1.0","create_time":"2024-05-14T17:34:09Z","event_type":"PAYMENT.CAPTURE.DENIED"}"#;
        let event: Value = serde_json::from_str(raw).unwrap();
        let body = verify_webhook_body(&transmission, "1JE4291016473214C", &event);
        assert_eq!(serde_json::to_string(&body["webhook_event"]).unwrap(), raw);
    }
}
