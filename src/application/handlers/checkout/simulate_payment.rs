//! SimulatePaymentHandler - development-only synchronous payment path.

use std::sync::Arc;

use crate::application::handlers::reconciliation::{
    ReconcilePaymentCommand, ReconcilePaymentHandler, ReconcilePaymentResult,
};
use crate::domain::foundation::{DomainError, ErrorCode, OrderId, Timestamp};
use crate::domain::reconciliation::{PaymentEvent, PaymentOutcome};
use crate::ports::{DomainRegistry, OrderStore};

/// Command to simulate an approved payment for an order.
#[derive(Debug, Clone)]
pub struct SimulatePaymentCommand {
    pub order_id: OrderId,
}

/// Result of a simulated payment.
#[derive(Debug, Clone)]
pub struct SimulatePaymentResult {
    /// Synthesized payment id recorded on the order.
    pub payment_id: String,
    pub outcome: ReconcilePaymentResult,
}

/// Handler that synthesizes an approved payment event for an order.
///
/// The synthesized event flows through the same reconciliation handler as
/// real webhook deliveries, so the simulated path cannot drift from the
/// production one. Refused outright outside development environments.
pub struct SimulatePaymentHandler {
    orders: Arc<dyn OrderStore>,
    registry: Arc<dyn DomainRegistry>,
    simulation_enabled: bool,
}

impl SimulatePaymentHandler {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        registry: Arc<dyn DomainRegistry>,
        simulation_enabled: bool,
    ) -> Self {
        Self {
            orders,
            registry,
            simulation_enabled,
        }
    }

    pub async fn handle(
        &self,
        cmd: SimulatePaymentCommand,
    ) -> Result<SimulatePaymentResult, DomainError> {
        if !self.simulation_enabled {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Payment simulation is disabled in this environment",
            ));
        }

        let order = self
            .orders
            .find_by_id(&cmd.order_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::OrderNotFound,
                    format!("Order {} not found", cmd.order_id),
                )
            })?;

        let payment_id = format!("SIM-{}", Timestamp::now().as_unix_millis());
        let event = PaymentEvent {
            order_id: order.id,
            payment_id: payment_id.clone(),
            amount_cents: order.total_cents,
            outcome: PaymentOutcome::Approved,
        };

        tracing::info!(order_id = %order.id, payment_id = %payment_id, "Simulating approved payment");

        let reconciler =
            ReconcilePaymentHandler::new(self.orders.clone(), self.registry.clone());
        let outcome = reconciler
            .handle(ReconcilePaymentCommand { event })
            .await?;

        Ok(SimulatePaymentResult {
            payment_id,
            outcome,
        })
    }
}
