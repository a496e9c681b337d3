//! Subscription handlers.

mod create_plan;

pub use create_plan::{CreateSubscriptionPlanCommand, CreateSubscriptionPlanHandler};
