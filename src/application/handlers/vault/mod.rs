//! Vault handlers.
//!
//! ## Commands
//! - Creating setup tokens (save a payment method without a purchase)
//! - Exchanging approved setup tokens for payment tokens

mod create_payment_token;
mod create_setup_token;

pub use create_payment_token::{CreatePaymentTokenCommand, CreatePaymentTokenHandler};
pub use create_setup_token::{CreateSetupTokenCommand, CreateSetupTokenHandler};
