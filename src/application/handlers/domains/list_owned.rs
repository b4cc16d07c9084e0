//! ListOwnedDomainsHandler - registrations belonging to an account.

use std::sync::Arc;

use crate::domain::foundation::{AccountId, DomainError};
use crate::domain::registry::DomainRecord;
use crate::ports::DomainRegistry;

/// Query for the registrations owned by an account.
#[derive(Debug, Clone)]
pub struct ListOwnedDomainsQuery {
    pub account_id: AccountId,
}

/// Handler that lists an account's domain registrations.
pub struct ListOwnedDomainsHandler {
    registry: Arc<dyn DomainRegistry>,
}

impl ListOwnedDomainsHandler {
    pub fn new(registry: Arc<dyn DomainRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(
        &self,
        query: ListOwnedDomainsQuery,
    ) -> Result<Vec<DomainRecord>, DomainError> {
        self.registry.list_by_owner(&query.account_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDomainRegistry;
    use crate::domain::foundation::{OrderId, Timestamp};

    fn record(owner: &str, domain: &str) -> DomainRecord {
        DomainRecord::activate(
            AccountId::new(owner).unwrap(),
            domain.to_string(),
            "com.ar".to_string(),
            OrderId::new(),
            12,
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn lists_only_the_callers_records() {
        let registry = Arc::new(InMemoryDomainRegistry::new());
        registry.insert(&record("acct-1", "mine")).await.unwrap();
        registry.insert(&record("acct-1", "alsomine")).await.unwrap();
        registry.insert(&record("acct-2", "theirs")).await.unwrap();

        let handler = ListOwnedDomainsHandler::new(registry);
        let records = handler
            .handle(ListOwnedDomainsQuery {
                account_id: AccountId::new("acct-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.owner.as_str() == "acct-1"));
    }

    #[tokio::test]
    async fn empty_for_account_without_domains() {
        let registry = Arc::new(InMemoryDomainRegistry::new());
        let handler = ListOwnedDomainsHandler::new(registry);

        let records = handler
            .handle(ListOwnedDomainsQuery {
                account_id: AccountId::new("acct-none").unwrap(),
            })
            .await
            .unwrap();

        assert!(records.is_empty());
    }
}
