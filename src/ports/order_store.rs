//! Order store port.

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, DomainError, OrderId, Timestamp};
use crate::domain::order::{FailureReason, Order};

/// Result of a conditional status transition.
///
/// Settlement transitions are compare-and-swap operations on
/// `status = pending`, performed inside the store so that concurrent
/// deliveries of the same payment outcome cannot both win.
#[derive(Debug, Clone)]
pub enum Transition {
    /// This caller performed the transition; the returned order is the
    /// post-transition state.
    Applied(Order),
    /// The order had already left Pending; the returned order is its
    /// current state, untouched by this call.
    NotPending(Order),
}

impl Transition {
    /// The order after the call, regardless of who transitioned it.
    pub fn order(&self) -> &Order {
        match self {
            Transition::Applied(order) | Transition::NotPending(order) => order,
        }
    }
}

/// Persistence port for orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a newly created order.
    async fn create(&self, order: &Order) -> Result<(), DomainError>;

    /// Finds an order by id.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Atomically transitions a Pending order to Paid.
    ///
    /// Returns `OrderNotFound` if the order does not exist.
    async fn transition_to_paid(
        &self,
        id: &OrderId,
        paid_at: Timestamp,
        payment_ref: &str,
    ) -> Result<Transition, DomainError>;

    /// Atomically transitions a Pending order to Failed, recording the reason.
    ///
    /// Returns `OrderNotFound` if the order does not exist.
    async fn transition_to_failed(
        &self,
        id: &OrderId,
        reason: &FailureReason,
    ) -> Result<Transition, DomainError>;

    /// Attaches an account to an ownerless order.
    ///
    /// Conditional on the order still being ownerless; returns false if
    /// another account got there first.
    async fn link_account(
        &self,
        id: &OrderId,
        account_id: &AccountId,
    ) -> Result<bool, DomainError>;

    /// Paid orders with no owning account whose guest email matches.
    async fn find_paid_ownerless_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<Order>, DomainError>;

    /// Pending orders created before the cutoff, oldest first.
    async fn list_pending_older_than(
        &self,
        cutoff: Timestamp,
    ) -> Result<Vec<Order>, DomainError>;

    /// Orders owned by an account, as buyer or through linking, newest first.
    async fn list_by_owner(&self, owner: &AccountId) -> Result<Vec<Order>, DomainError>;
}
