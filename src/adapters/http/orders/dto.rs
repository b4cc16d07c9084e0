//! Response DTOs for order endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrderId, Timestamp};
use crate::domain::order::{FailureReason, Order, OrderStatus};

/// Order view returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: OrderId,
    pub order_number: String,
    pub domain: String,
    pub period: String,
    pub amount_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub payment_method: String,
    pub status: OrderStatus,
    pub owner_account_id: Option<String>,
    pub guest_email: Option<String>,
    pub created_at: Timestamp,
    pub paid_at: Option<Timestamp>,
    pub payment_ref: Option<String>,
    pub failure_reason: Option<FailureReason>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number.to_string(),
            domain: order.domain.clone(),
            period: order.period.as_str().to_string(),
            amount_cents: order.amount_cents,
            discount_cents: order.discount_cents,
            total_cents: order.total_cents,
            payment_method: order.payment_method.clone(),
            status: order.status,
            owner_account_id: order.owner().map(|a| a.as_str().to_string()),
            guest_email: order.buyer.guest_contact().map(|c| c.email.clone()),
            created_at: order.created_at,
            paid_at: order.paid_at,
            payment_ref: order.payment_ref,
            failure_reason: order.failure_reason,
        }
    }
}

/// GET /api/orders response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedOrdersResponse {
    pub count: usize,
    pub orders: Vec<OrderResponse>,
}

/// GET /api/orders/stale response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaleOrdersResponse {
    pub count: usize,
    pub orders: Vec<OrderResponse>,
}

/// Query parameters for the stale-pending listing.
#[derive(Debug, Clone, Deserialize)]
pub struct StaleOrdersParams {
    /// Minimum age in hours. Defaults to 24.
    pub hours: Option<u32>,
}
