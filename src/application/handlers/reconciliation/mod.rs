//! Reconciliation handlers - applying payment outcomes to orders.

mod process_payment_event;
mod provisioning;

pub use process_payment_event::{
    ReconcilePaymentCommand, ReconcilePaymentHandler, ReconcilePaymentResult,
};
pub use provisioning::ProvisionOutcome;
pub(crate) use provisioning::provision_domain;
