//! Foundation module - Shared domain primitives.
//!
//! Contains the money value object and validation errors shared by the
//! shipping, checkout, vault, and subscription modules.

mod errors;
mod money;

pub use errors::ValidationError;
pub use money::{Money, CURRENCY_CODE};
