//! RecalculateShippingHandler - the platform's mid-checkout shipping callback.

use tracing::{debug, info};

use crate::domain::foundation::Money;
use crate::domain::shipping::{
    recalculate_shipping, CountryCode, ShippingAddress, ShippingError, ShippingPolicy,
    ShippingRecalcRequest, ShippingRecalcResponse, ShippingSelection,
};

/// Address fields as the platform sends them. Any of them may be absent.
#[derive(Debug, Clone, Default)]
pub struct AddressInput {
    pub country_code: Option<String>,
    pub admin_area_1: Option<String>,
    pub admin_area_2: Option<String>,
    pub postal_code: Option<String>,
}

/// Command carrying the raw callback fields.
///
/// Fields stay optional here so the country check can run before anything
/// else is required.
#[derive(Debug, Clone, Default)]
pub struct RecalculateShippingCommand {
    pub order_id: Option<String>,
    pub shipping_address: Option<AddressInput>,
    pub shipping_option_id: Option<String>,
    /// `purchase_units[0].amount.breakdown.item_total.value`
    pub item_total: Option<String>,
    /// Set when the payload had no `purchase_units` at all.
    pub missing_purchase_units: bool,
}

/// Handler for the shipping recalculation callback. Pure and synchronous.
#[derive(Debug, Clone, Default)]
pub struct RecalculateShippingHandler {
    policy: ShippingPolicy,
}

impl RecalculateShippingHandler {
    pub fn new(policy: ShippingPolicy) -> Self {
        Self { policy }
    }

    pub fn handle(
        &self,
        cmd: RecalculateShippingCommand,
    ) -> Result<ShippingRecalcResponse, ShippingError> {
        // 1. Destination first: a foreign address is rejected whatever else is sent
        let address = cmd
            .shipping_address
            .ok_or_else(|| ShippingError::malformed("shipping_address is required"))?;
        let address = parse_address(address)?;
        self.policy.ensure_deliverable(&address)?;
        debug!(
            country = %address.country_code,
            admin_area_1 = address.admin_area_1.as_deref().unwrap_or_default(),
            admin_area_2 = address.admin_area_2.as_deref().unwrap_or_default(),
            postal_code = address.postal_code.as_deref().unwrap_or_default(),
            "shipping destination accepted"
        );

        // 2. Remaining required fields
        let order_id = cmd
            .order_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ShippingError::malformed("id is required"))?;
        if cmd.missing_purchase_units {
            return Err(ShippingError::malformed("purchase_units is required"));
        }
        let raw_total = cmd.item_total.ok_or_else(|| {
            ShippingError::malformed("purchase_units[0].amount.breakdown.item_total is required")
        })?;
        let item_total = Money::parse(&raw_total, "item_total")?;

        // 3. Resolve the selection once
        let selection = ShippingSelection::from_option_id(cmd.shipping_option_id.as_deref());
        debug!(order_id = %order_id, ?selection, "resolved shipping selection");

        let response = recalculate_shipping(
            &self.policy,
            ShippingRecalcRequest {
                order_id,
                shipping_address: address,
                selection,
                item_total,
            },
        )?;

        info!(
            order_id = %response.order_id,
            item_total = %response.item_total,
            shipping = %response.shipping_amount,
            total = %response.total,
            "shipping recalculated"
        );
        Ok(response)
    }
}

/// A present but unreadable country code cannot be a supported destination,
/// so it is rejected like any other foreign country.
fn parse_address(input: AddressInput) -> Result<ShippingAddress, ShippingError> {
    let raw_country = input
        .country_code
        .filter(|code| !code.trim().is_empty())
        .ok_or_else(|| ShippingError::malformed("shipping_address.country_code is required"))?;
    let country_code = CountryCode::new(&raw_country)
        .map_err(|_| ShippingError::unsupported_country(raw_country.trim()))?;

    Ok(ShippingAddress {
        country_code,
        admin_area_1: input.admin_area_1,
        admin_area_2: input.admin_area_2,
        postal_code: input.postal_code,
    })
}
