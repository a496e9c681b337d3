//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (money, validation errors)
//! - `shipping` - Shipping option table and the shipping recalculation callback
//! - `checkout` - Cart totals and platform order payloads
//! - `vault` - Setup token and payment token payloads
//! - `subscription` - Catalog product and billing plan payloads
//! - `webhook` - Classification of platform webhook events

pub mod checkout;
pub mod foundation;
pub mod shipping;
pub mod subscription;
pub mod vault;
pub mod webhook;
