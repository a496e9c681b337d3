//! Wire shapes of the shipping recalculation callback.
//!
//! The incoming payload is kept as a loose JSON tree. A field with an
//! unexpected type reads as absent, so the handler still sees the address
//! and decides what is required and in which order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::{AddressInput, RecalculateShippingCommand};
use crate::domain::foundation::{Money, CURRENCY_CODE};
use crate::domain::shipping::{ShippingOption, ShippingRecalcResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Callback payload sent by the platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShippingCallbackRequest(Value);

impl ShippingCallbackRequest {
    /// Any JSON document is accepted; only unparseable bytes fail.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body).map(Self)
    }

    /// Pulls the fields the recalculation reads out of the nested payload.
    pub fn into_command(self) -> RecalculateShippingCommand {
        let payload = &self.0;
        let missing_purchase_units = payload
            .get("purchase_units")
            .map_or(true, Value::is_null);

        RecalculateShippingCommand {
            order_id: text_at(payload, "/id"),
            shipping_address: payload
                .get("shipping_address")
                .filter(|address| address.is_object())
                .map(|address| AddressInput {
                    country_code: text_at(address, "/country_code"),
                    admin_area_1: text_at(address, "/admin_area_1"),
                    admin_area_2: text_at(address, "/admin_area_2"),
                    postal_code: text_at(address, "/postal_code"),
                }),
            shipping_option_id: text_at(payload, "/shipping_option/id"),
            item_total: text_at(
                payload,
                "/purchase_units/0/amount/breakdown/item_total/value",
            ),
            missing_purchase_units,
        }
    }
}

/// Strings are taken as sent; numbers by their JSON text. Anything else is absent.
fn text_at(value: &Value, pointer: &str) -> Option<String> {
    match value.pointer(pointer)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// 200 body: the recomputed purchase unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingCallbackResponse {
    pub id: String,
    pub purchase_units: Vec<PurchaseUnitResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseUnitResponse {
    pub reference_id: String,
    pub amount: OrderAmountResponse,
    pub shipping_options: Vec<ShippingOptionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderAmountResponse {
    pub currency_code: String,
    pub value: Money,
    pub breakdown: BreakdownResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreakdownResponse {
    pub item_total: MoneyResponse,
    pub shipping: MoneyResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoneyResponse {
    pub currency_code: String,
    pub value: Money,
}

impl From<Money> for MoneyResponse {
    fn from(value: Money) -> Self {
        Self {
            currency_code: CURRENCY_CODE.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingOptionResponse {
    pub id: String,
    pub amount: MoneyResponse,
    #[serde(rename = "type")]
    pub option_type: String,
    pub label: String,
    pub selected: bool,
}

impl From<&ShippingOption> for ShippingOptionResponse {
    fn from(option: &ShippingOption) -> Self {
        Self {
            id: option.id().to_string(),
            amount: option.amount().into(),
            option_type: "SHIPPING".to_string(),
            label: option.label().to_string(),
            selected: option.selected,
        }
    }
}

impl From<ShippingRecalcResponse> for ShippingCallbackResponse {
    fn from(result: ShippingRecalcResponse) -> Self {
        let purchase_unit = PurchaseUnitResponse {
            reference_id: "default".to_string(),
            amount: OrderAmountResponse {
                currency_code: CURRENCY_CODE.to_string(),
                value: result.total,
                breakdown: BreakdownResponse {
                    item_total: result.item_total.into(),
                    shipping: result.shipping_amount.into(),
                },
            },
            shipping_options: result
                .shipping_options
                .iter()
                .map(ShippingOptionResponse::from)
                .collect(),
        };

        Self {
            id: result.order_id,
            purchase_units: vec![purchase_unit],
        }
    }
}

/// 422 body the platform reads as "ask the buyer for another address".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingRejectionResponse {
    pub name: String,
    pub details: Vec<RejectionDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RejectionDetail {
    pub issue: String,
}

impl ShippingRejectionResponse {
    pub fn country_error() -> Self {
        Self {
            name: "UNPROCESSABLE_ENTITY".to_string(),
            details: vec![RejectionDetail {
                issue: "COUNTRY_ERROR".to_string(),
            }],
        }
    }
}
