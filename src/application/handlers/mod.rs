//! Command and query handlers, one module per feature area.

pub mod accounts;
pub mod checkout;
pub mod domains;
pub mod orders;
pub mod reconciliation;
