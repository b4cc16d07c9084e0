//! Catalog module - Billing plans for registration periods.

mod plan;

pub use plan::{plan_for, BillingPeriod, BillingPlan};
