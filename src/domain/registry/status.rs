//! Registration record lifecycle status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a domain registration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainStatus {
    /// Registration requested but not yet effective.
    Pending,
    /// Registration is live.
    Active,
    /// Inside the expiration warning window.
    Expiring,
    /// Registration has lapsed.
    Expired,
}

impl StateMachine for DomainStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DomainStatus::*;
        matches!(
            (self, target),
            (Pending, Active)
                | (Active, Expiring)
                | (Active, Expired)
                | (Expiring, Active)
                | (Expiring, Expired)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DomainStatus::*;
        match self {
            Pending => vec![Active],
            Active => vec![Expiring, Expired],
            Expiring => vec![Active, Expired],
            Expired => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_activates() {
        assert!(DomainStatus::Pending.can_transition_to(&DomainStatus::Active));
    }

    #[test]
    fn active_can_enter_warning_window() {
        assert!(DomainStatus::Active.can_transition_to(&DomainStatus::Expiring));
    }

    #[test]
    fn expiring_can_renew_back_to_active() {
        assert!(DomainStatus::Expiring.can_transition_to(&DomainStatus::Active));
    }

    #[test]
    fn expired_is_terminal() {
        assert!(DomainStatus::Expired.is_terminal());
        assert!(!DomainStatus::Expired.can_transition_to(&DomainStatus::Active));
    }

    #[test]
    fn pending_cannot_expire_directly() {
        assert!(!DomainStatus::Pending.can_transition_to(&DomainStatus::Expired));
    }
}
