//! Order lifecycle status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle status of an order.
///
/// Orders are created Pending and settle into exactly one terminal state.
/// There is no path out of a terminal state; late or duplicate payment
/// notifications must not move a settled order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Created, awaiting payment outcome.
    Pending,
    /// Payment approved and verified.
    Paid,
    /// Payment rejected, cancelled by the gateway, or amount mismatch.
    Failed,
    /// Administratively cancelled before payment.
    Cancelled,
}

impl StateMachine for OrderStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OrderStatus::*;
        matches!(
            (self, target),
            (Pending, Paid) | (Pending, Failed) | (Pending, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OrderStatus::*;
        match self {
            Pending => vec![Paid, Failed, Cancelled],
            Paid | Failed | Cancelled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_transition_to_paid() {
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Paid));
    }

    #[test]
    fn pending_can_transition_to_failed() {
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Failed));
    }

    #[test]
    fn pending_can_transition_to_cancelled() {
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Cancelled));
    }

    #[test]
    fn paid_is_terminal() {
        assert!(OrderStatus::Paid.is_terminal());
        assert!(!OrderStatus::Paid.can_transition_to(&OrderStatus::Failed));
        assert!(!OrderStatus::Paid.can_transition_to(&OrderStatus::Pending));
    }

    #[test]
    fn failed_is_terminal() {
        assert!(OrderStatus::Failed.is_terminal());
        assert!(!OrderStatus::Failed.can_transition_to(&OrderStatus::Paid));
    }

    #[test]
    fn cancelled_is_terminal() {
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Cancelled.can_transition_to(&OrderStatus::Paid));
    }

    #[test]
    fn pending_is_not_terminal() {
        assert!(!OrderStatus::Pending.is_terminal());
    }

    #[test]
    fn transition_to_rejects_terminal_to_terminal() {
        let result = OrderStatus::Failed.transition_to(OrderStatus::Paid);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
