//! Reconciliation module - normalized payment outcomes.

mod event;

pub use event::{amount_matches, PaymentEvent, PaymentOutcome, AMOUNT_TOLERANCE_CENTS};
