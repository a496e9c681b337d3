//! Shipping handlers.
//!
//! ## Commands
//! - Recalculating the order breakdown when the buyer changes address or option

mod recalculate_shipping;

pub use recalculate_shipping::{AddressInput, RecalculateShippingCommand, RecalculateShippingHandler};
