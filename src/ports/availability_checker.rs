//! Domain availability port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// Availability of a domain in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// No registration found; the domain can be purchased.
    Available,
    /// Already registered.
    Registered,
}

/// Port for checking domain availability against the registry.
///
/// A checker failure is an error, never a fabricated `Available`.
#[async_trait]
pub trait AvailabilityChecker: Send + Sync {
    /// Checks whether `<name>.<suffix>` is registered.
    async fn check(&self, name: &str, suffix: &str) -> Result<Availability, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_checker_is_object_safe() {
        fn _accepts_dyn(_checker: &dyn AvailabilityChecker) {}
    }
}
