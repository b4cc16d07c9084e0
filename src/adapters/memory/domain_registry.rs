//! In-memory domain registry.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode, OrderId};
use crate::domain::registry::{DomainRecord, DomainStatus};
use crate::ports::DomainRegistry;

/// Mutex-backed registry for tests and local development.
pub struct InMemoryDomainRegistry {
    records: Mutex<Vec<DomainRecord>>,
}

impl InMemoryDomainRegistry {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<DomainRecord>>, DomainError> {
        self.records
            .lock()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Registry lock poisoned"))
    }
}

impl Default for InMemoryDomainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DomainRegistry for InMemoryDomainRegistry {
    async fn insert(&self, record: &DomainRecord) -> Result<(), DomainError> {
        self.lock()?.push(record.clone());
        Ok(())
    }

    async fn find_by_order(
        &self,
        order_id: &OrderId,
    ) -> Result<Option<DomainRecord>, DomainError> {
        Ok(self
            .lock()?
            .iter()
            .find(|r| &r.order_id == order_id)
            .cloned())
    }

    async fn find_active(
        &self,
        domain: &str,
        suffix: &str,
    ) -> Result<Option<DomainRecord>, DomainError> {
        Ok(self
            .lock()?
            .iter()
            .find(|r| r.status == DomainStatus::Active && r.domain == domain && r.suffix == suffix)
            .cloned())
    }

    async fn list_by_owner(&self, owner: &AccountId) -> Result<Vec<DomainRecord>, DomainError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|r| &r.owner == owner)
            .cloned()
            .collect())
    }
}
