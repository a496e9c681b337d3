//! Checkout Relay - payments platform integration server
//!
//! This crate hosts the shipping recalculation callback the payments
//! platform invokes mid-checkout, and relays browser-initiated payment
//! calls (orders, vault, subscriptions, webhooks) to the platform's REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
