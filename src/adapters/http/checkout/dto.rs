//! Request/response DTOs for checkout endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::checkout::CreateOrderResult;
use crate::domain::foundation::OrderId;

/// Guest contact details supplied at checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub tax_id: Option<String>,
}

/// POST /api/checkout/orders request body.
///
/// The period is a catalog selector; the client never sends a price.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub domain: String,
    pub period: String,
    /// Required when the caller is not authenticated.
    pub guest: Option<GuestContactRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub order_id: OrderId,
    pub order_number: String,
    pub domain: String,
    pub period: String,
    pub total_cents: i64,
    /// Hosted checkout URL to redirect the buyer to.
    pub redirect_url: String,
}

impl From<CreateOrderResult> for CreateOrderResponse {
    fn from(result: CreateOrderResult) -> Self {
        Self {
            order_id: result.order.id,
            order_number: result.order.order_number.to_string(),
            domain: result.order.domain,
            period: result.order.period.as_str().to_string(),
            total_cents: result.order.total_cents,
            redirect_url: result.redirect_url,
        }
    }
}

/// POST /api/checkout/simulate-payment request body.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulatePaymentRequest {
    pub order_id: OrderId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatePaymentResponse {
    pub payment_id: String,
    pub result: String,
}
