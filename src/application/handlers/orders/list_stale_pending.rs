//! ListStalePendingOrdersHandler - operational listing of unsettled orders.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::order::Order;
use crate::ports::OrderStore;

/// Query for Pending orders older than a number of hours.
#[derive(Debug, Clone)]
pub struct ListStalePendingQuery {
    pub older_than_hours: u32,
}

/// Handler listing Pending orders that never received a payment outcome.
///
/// These are candidates for manual reconciliation against the gateway.
/// Read-only: nothing here mutates order state.
pub struct ListStalePendingOrdersHandler {
    orders: Arc<dyn OrderStore>,
}

impl ListStalePendingOrdersHandler {
    pub fn new(orders: Arc<dyn OrderStore>) -> Self {
        Self { orders }
    }

    pub async fn handle(&self, query: ListStalePendingQuery) -> Result<Vec<Order>, DomainError> {
        if query.older_than_hours == 0 {
            return Err(DomainError::validation(
                "hours",
                "Hours must be at least 1",
            ));
        }

        let cutoff = Timestamp::now().minus_hours(i64::from(query.older_than_hours));
        self.orders.list_pending_older_than(cutoff).await
    }
}
