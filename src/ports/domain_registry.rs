//! Domain registry port.

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, DomainError, OrderId};
use crate::domain::registry::DomainRecord;

/// Persistence port for domain registration records.
#[async_trait]
pub trait DomainRegistry: Send + Sync {
    /// Persists a new registration record.
    async fn insert(&self, record: &DomainRecord) -> Result<(), DomainError>;

    /// Finds the record provisioned for a given order, if any.
    ///
    /// This is the idempotency check for provisioning: one paid order
    /// produces at most one record.
    async fn find_by_order(&self, order_id: &OrderId) -> Result<Option<DomainRecord>, DomainError>;

    /// Finds an Active record for the given label and suffix, if any.
    async fn find_active(
        &self,
        domain: &str,
        suffix: &str,
    ) -> Result<Option<DomainRecord>, DomainError>;

    /// All records owned by an account.
    async fn list_by_owner(
        &self,
        owner: &AccountId,
    ) -> Result<Vec<DomainRecord>, DomainError>;
}
