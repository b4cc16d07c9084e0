//! Domain layer - aggregates, value objects, and pure business rules.

pub mod catalog;
pub mod foundation;
pub mod order;
pub mod reconciliation;
pub mod registry;
