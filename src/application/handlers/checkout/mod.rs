//! Checkout handlers.
//!
//! ## Commands
//! - Creating orders (plain and with shipping callback)
//! - Capturing or authorizing approved orders
//! - Issuing client tokens for browser SDKs

mod create_order;
mod issue_client_token;
mod settle_order;

pub use create_order::{CreateOrderCommand, CreateOrderHandler};
pub use issue_client_token::IssueClientTokenHandler;
pub use settle_order::{SettleOrderCommand, SettleOrderHandler};
