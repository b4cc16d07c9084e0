//! Normalized payment events.
//!
//! The gateway's loosely-typed notification payload is normalized into
//! these types at the HTTP boundary; nothing past that boundary sees raw
//! gateway JSON.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OrderId;

/// Allowed difference between the order total and the amount the gateway
/// reports for an approved payment, in cents.
pub const AMOUNT_TOLERANCE_CENTS: i64 = 1;

/// Settlement outcome reported by the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    /// Payment approved; amount must still be verified.
    Approved,
    /// Payment rejected by the gateway.
    Rejected,
    /// Payment cancelled before completion.
    Cancelled,
    /// Any non-final gateway status, carried verbatim.
    InProgress(String),
}

impl PaymentOutcome {
    /// Maps a raw gateway status string to an outcome.
    pub fn from_gateway_status(status: &str) -> Self {
        match status {
            "approved" => PaymentOutcome::Approved,
            "rejected" => PaymentOutcome::Rejected,
            "cancelled" => PaymentOutcome::Cancelled,
            other => PaymentOutcome::InProgress(other.to_string()),
        }
    }
}

/// A payment outcome for a specific order, ready for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEvent {
    /// Order the gateway correlated via `external_reference`.
    pub order_id: OrderId,
    /// Gateway payment id.
    pub payment_id: String,
    /// Amount the gateway reports, in cents.
    pub amount_cents: i64,
    pub outcome: PaymentOutcome,
}

/// Checks a reported amount against the order total within tolerance.
pub fn amount_matches(expected_cents: i64, reported_cents: i64) -> bool {
    (expected_cents - reported_cents).abs() <= AMOUNT_TOLERANCE_CENTS
}
