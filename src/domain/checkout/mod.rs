//! Checkout module - carts and the orders created from them.

mod cart;
mod errors;
mod order;

pub use cart::{Cart, CartItem, MAX_QUANTITY};
pub use errors::CheckoutError;
pub use order::{OrderDraft, OrderIntent, ShippingSetup, VaultOnSuccess};
