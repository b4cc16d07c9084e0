//! GetOrderHandler - single order lookup with ownership checks.

use std::sync::Arc;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode, OrderId};
use crate::domain::order::Order;
use crate::ports::OrderStore;

/// Query for a single order.
#[derive(Debug, Clone)]
pub struct GetOrderQuery {
    pub order_id: OrderId,
    /// The authenticated account making the request, if any.
    pub requester: Option<AccountId>,
}

/// Handler that fetches an order, enforcing ownership.
///
/// Owned orders are visible only to their owner. Ownerless guest orders
/// stay fetchable by id so the post-checkout status page works before any
/// account exists.
pub struct GetOrderHandler {
    orders: Arc<dyn OrderStore>,
}

impl GetOrderHandler {
    pub fn new(orders: Arc<dyn OrderStore>) -> Self {
        Self { orders }
    }

    pub async fn handle(&self, query: GetOrderQuery) -> Result<Order, DomainError> {
        let order = self
            .orders
            .find_by_id(&query.order_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::OrderNotFound,
                    format!("Order {} not found", query.order_id),
                )
            })?;

        if let Some(owner) = order.owner() {
            if query.requester.as_ref() != Some(owner) {
                return Err(DomainError::new(
                    ErrorCode::Forbidden,
                    "Order belongs to another account",
                )
                .with_detail("order_id", order.id.to_string()));
            }
        }

        Ok(order)
    }
}
