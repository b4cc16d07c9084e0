//! ListOwnedOrdersHandler - an account's order history.

use std::sync::Arc;

use crate::domain::foundation::{AccountId, DomainError};
use crate::domain::order::Order;
use crate::ports::OrderStore;

/// Query for the orders owned by an account.
#[derive(Debug, Clone)]
pub struct ListOwnedOrdersQuery {
    pub account_id: AccountId,
}

/// Handler that lists an account's orders, newest first.
///
/// Covers both orders placed under the account and guest orders attached
/// to it afterwards.
pub struct ListOwnedOrdersHandler {
    orders: Arc<dyn OrderStore>,
}

impl ListOwnedOrdersHandler {
    pub fn new(orders: Arc<dyn OrderStore>) -> Self {
        Self { orders }
    }

    pub async fn handle(&self, query: ListOwnedOrdersQuery) -> Result<Vec<Order>, DomainError> {
        self.orders.list_by_owner(&query.account_id).await
    }
}
