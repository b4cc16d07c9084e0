//! In-memory order store.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode, OrderId, Timestamp};
use crate::domain::order::{FailureReason, Order, OrderStatus};
use crate::ports::{OrderStore, Transition};

/// Mutex-backed order store for tests and local development.
///
/// Conditional transitions run inside the lock, so concurrent settlement
/// attempts serialize the same way the SQL adapter's conditional UPDATEs do.
pub struct InMemoryOrderStore {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Order>>, DomainError> {
        self.orders
            .lock()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Order store lock poisoned"))
    }

    fn not_found(id: &OrderId) -> DomainError {
        DomainError::new(ErrorCode::OrderNotFound, format!("Order {} not found", id))
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: &Order) -> Result<(), DomainError> {
        self.lock()?.push(order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self.lock()?.iter().find(|o| &o.id == id).cloned())
    }

    async fn transition_to_paid(
        &self,
        id: &OrderId,
        paid_at: Timestamp,
        payment_ref: &str,
    ) -> Result<Transition, DomainError> {
        let mut orders = self.lock()?;
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        if order.status != OrderStatus::Pending {
            return Ok(Transition::NotPending(order.clone()));
        }
        order.mark_paid(paid_at, payment_ref)?;
        Ok(Transition::Applied(order.clone()))
    }

    async fn transition_to_failed(
        &self,
        id: &OrderId,
        reason: &FailureReason,
    ) -> Result<Transition, DomainError> {
        let mut orders = self.lock()?;
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        if order.status != OrderStatus::Pending {
            return Ok(Transition::NotPending(order.clone()));
        }
        order.mark_failed(reason.clone())?;
        Ok(Transition::Applied(order.clone()))
    }

    async fn link_account(
        &self,
        id: &OrderId,
        account_id: &AccountId,
    ) -> Result<bool, DomainError> {
        let mut orders = self.lock()?;
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        if !order.is_ownerless() {
            return Ok(false);
        }
        order.attach_account(account_id.clone())?;
        Ok(true)
    }

    async fn find_paid_ownerless_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<Order>, DomainError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|o| o.status == OrderStatus::Paid && o.is_ownerless())
            .filter(|o| {
                o.buyer
                    .guest_contact()
                    .map(|c| c.email_matches(email))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    async fn list_pending_older_than(
        &self,
        cutoff: Timestamp,
    ) -> Result<Vec<Order>, DomainError> {
        let mut stale: Vec<Order> = self
            .lock()?
            .iter()
            .filter(|o| o.status == OrderStatus::Pending && o.created_at.is_before(&cutoff))
            .cloned()
            .collect();
        stale.sort_by_key(|o| o.created_at);
        Ok(stale)
    }

    async fn list_by_owner(&self, owner: &AccountId) -> Result<Vec<Order>, DomainError> {
        let mut owned: Vec<Order> = self
            .lock()?
            .iter()
            .filter(|o| o.owner() == Some(owner))
            .cloned()
            .collect();
        owned.sort_by_key(|o| std::cmp::Reverse(o.created_at));
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{plan_for, BillingPeriod};
    use crate::domain::order::Buyer;

    fn order_at(created_at: Timestamp) -> Order {
        Order::create(
            "example.com.ar",
            plan_for(BillingPeriod::OneMonth),
            "mercadopago",
            Buyer::account(AccountId::new("acct-1").unwrap()),
            created_at,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn transition_to_paid_applies_once() {
        let store = InMemoryOrderStore::new();
        let order = order_at(Timestamp::now());
        store.create(&order).await.unwrap();

        let first = store
            .transition_to_paid(&order.id, Timestamp::now(), "pay-1")
            .await
            .unwrap();
        assert!(matches!(first, Transition::Applied(_)));

        let second = store
            .transition_to_paid(&order.id, Timestamp::now(), "pay-2")
            .await
            .unwrap();
        match second {
            Transition::NotPending(current) => {
                assert_eq!(current.payment_ref.as_deref(), Some("pay-1"));
            }
            Transition::Applied(_) => panic!("Second transition must not apply"),
        }
    }

    #[tokio::test]
    async fn transition_of_missing_order_is_not_found() {
        let store = InMemoryOrderStore::new();
        let result = store
            .transition_to_paid(&OrderId::new(), Timestamp::now(), "pay-1")
            .await;
        match result {
            Err(e) => assert_eq!(e.code, ErrorCode::OrderNotFound),
            Ok(_) => panic!("Expected OrderNotFound"),
        }
    }

    #[tokio::test]
    async fn link_account_is_conditional_on_ownerless() {
        let store = InMemoryOrderStore::new();
        let order = order_at(Timestamp::now());
        store.create(&order).await.unwrap();

        let linked = store
            .link_account(&order.id, &AccountId::new("acct-2").unwrap())
            .await
            .unwrap();
        assert!(!linked);
    }

    #[tokio::test]
    async fn owner_listing_returns_newest_first() {
        let store = InMemoryOrderStore::new();
        let now = Timestamp::now();
        let older = order_at(now.minus_hours(2));
        let newer = order_at(now);
        store.create(&older).await.unwrap();
        store.create(&newer).await.unwrap();

        let owned = store
            .list_by_owner(&AccountId::new("acct-1").unwrap())
            .await
            .unwrap();
        let ids: Vec<OrderId> = owned.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);

        let other = store
            .list_by_owner(&AccountId::new("acct-2").unwrap())
            .await
            .unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn stale_listing_returns_oldest_first() {
        let store = InMemoryOrderStore::new();
        let now = Timestamp::now();
        let older = order_at(now.minus_hours(48));
        let newer = order_at(now.minus_hours(30));
        let fresh = order_at(now);
        store.create(&newer).await.unwrap();
        store.create(&older).await.unwrap();
        store.create(&fresh).await.unwrap();

        let stale = store
            .list_pending_older_than(now.minus_hours(24))
            .await
            .unwrap();
        let ids: Vec<OrderId> = stale.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![older.id, newer.id]);
    }
}
