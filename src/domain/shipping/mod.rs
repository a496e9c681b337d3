//! Shipping module - the shipping recalculation callback.
//!
//! # Module Structure
//!
//! - `address` - Country code and shipping address value objects
//! - `option` - Fixed free/express option table and the buyer's selection
//! - `policy` - Supported destination country
//! - `recalculation` - Pure recalculation of shipping and order total
//! - `errors` - Rejection and malformed-payload errors

mod address;
mod errors;
mod option;
mod policy;
mod recalculation;

pub use address::{CountryCode, ShippingAddress};
pub use errors::ShippingError;
pub use option::{shipping_options, ShippingMethod, ShippingOption, ShippingSelection};
pub use policy::ShippingPolicy;
pub use recalculation::{recalculate_shipping, ShippingRecalcRequest, ShippingRecalcResponse};
