//! CreateOrderHandler - checkout entry point.

use std::sync::Arc;

use crate::domain::catalog::{plan_for, BillingPeriod};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::order::{Buyer, Order};
use crate::domain::registry::split_domain;
use crate::ports::{Availability, AvailabilityChecker, OrderStore, PaymentGateway};

/// Command to create a Pending order for a domain purchase.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Full domain string, e.g. `example.com.ar`.
    pub domain: String,
    pub period: BillingPeriod,
    pub buyer: Buyer,
}

/// Result of order creation.
#[derive(Debug, Clone)]
pub struct CreateOrderResult {
    pub order: Order,
    /// Hosted checkout URL the buyer is redirected to.
    pub redirect_url: String,
}

/// Handler that creates a Pending order and hands the buyer to the gateway.
///
/// Pricing is snapshotted from the catalog; the client never supplies a
/// price. The gateway redirect carries the order id so the asynchronous
/// payment outcome can be correlated back.
pub struct CreateOrderHandler {
    orders: Arc<dyn OrderStore>,
    availability: Arc<dyn AvailabilityChecker>,
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateOrderHandler {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        availability: Arc<dyn AvailabilityChecker>,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            orders,
            availability,
            gateway,
        }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<CreateOrderResult, DomainError> {
        if !self.gateway.is_configured() {
            return Err(DomainError::new(
                ErrorCode::NotConfigured,
                "Payment gateway is not configured",
            ));
        }

        let (name, suffix) = split_domain(&cmd.domain)?;

        match self.availability.check(&name, &suffix).await? {
            Availability::Available => {}
            Availability::Registered => {
                return Err(DomainError::new(
                    ErrorCode::DomainUnavailable,
                    format!("Domain {} is already registered", cmd.domain),
                )
                .with_detail("domain", cmd.domain));
            }
        }

        let plan = plan_for(cmd.period);
        let order = Order::create(
            cmd.domain,
            plan,
            "mercadopago",
            cmd.buyer,
            Timestamp::now(),
        )?;

        self.orders.create(&order).await?;

        let redirect_url = self
            .gateway
            .checkout_url(plan.plan_ref, &order.id, &order.domain);

        tracing::info!(
            order_id = %order.id,
            order_number = %order.order_number,
            domain = %order.domain,
            period = %order.period,
            total_cents = order.total_cents,
            guest = order.buyer.is_guest(),
            "Order created"
        );

        Ok(CreateOrderResult {
            order,
            redirect_url,
        })
    }
}
