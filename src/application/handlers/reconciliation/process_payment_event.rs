//! ReconcilePaymentHandler - settles an order from a normalized payment event.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, DomainRecordId, ErrorCode, OrderId, Timestamp};
use crate::domain::order::{FailureReason, OrderStatus};
use crate::domain::reconciliation::{amount_matches, PaymentEvent, PaymentOutcome};
use crate::ports::{DomainRegistry, OrderStore, Transition};

use super::provisioning::{provision_domain, ProvisionOutcome};

/// Command to reconcile a payment outcome against its order.
#[derive(Debug, Clone)]
pub struct ReconcilePaymentCommand {
    pub event: PaymentEvent,
}

/// Result of payment reconciliation.
#[derive(Debug, Clone)]
pub enum ReconcilePaymentResult {
    /// Order paid and its domain registered.
    Provisioned {
        order_id: OrderId,
        record_id: DomainRecordId,
    },
    /// Order paid; no account to register the domain under yet.
    ProvisioningDeferred { order_id: OrderId },
    /// Order paid but the registry write failed. Retryable.
    PaidButUnprovisioned {
        order_id: OrderId,
        error: DomainError,
    },
    /// Order paid but an Active record already holds the domain. Flagged.
    DuplicateActiveDomain { order_id: OrderId },
    /// Approved amount did not match the order total; order failed.
    AmountMismatch {
        order_id: OrderId,
        expected_cents: i64,
        reported_cents: i64,
    },
    /// Gateway declined; order failed.
    Failed { order_id: OrderId },
    /// The order had already settled; nothing was changed.
    AlreadyHandled { order_id: OrderId },
    /// Approved outcome arrived for an order that already failed or was
    /// cancelled. Flagged for operator review; nothing was changed.
    Anomaly { order_id: OrderId },
    /// Non-final gateway status; acknowledged without any transition.
    Acknowledged { order_id: OrderId },
}

/// Handler that applies a payment outcome to an order exactly once.
///
/// Duplicate and out-of-order deliveries are absorbed here: settlement is a
/// store-level compare-and-swap on Pending, and provisioning is keyed on the
/// order id.
pub struct ReconcilePaymentHandler {
    orders: Arc<dyn OrderStore>,
    registry: Arc<dyn DomainRegistry>,
}

impl ReconcilePaymentHandler {
    pub fn new(orders: Arc<dyn OrderStore>, registry: Arc<dyn DomainRegistry>) -> Self {
        Self { orders, registry }
    }

    pub async fn handle(
        &self,
        cmd: ReconcilePaymentCommand,
    ) -> Result<ReconcilePaymentResult, DomainError> {
        let event = cmd.event;

        let order = self
            .orders
            .find_by_id(&event.order_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::OrderNotFound,
                    format!("Order {} not found", event.order_id),
                )
            })?;

        // Settled orders absorb duplicates; an approval against a failed or
        // cancelled order is an anomaly that needs operator eyes.
        if order.status != OrderStatus::Pending {
            if event.outcome == PaymentOutcome::Approved
                && matches!(order.status, OrderStatus::Failed | OrderStatus::Cancelled)
            {
                tracing::warn!(
                    order_id = %order.id,
                    order_status = ?order.status,
                    payment_id = %event.payment_id,
                    "Approved payment arrived for a settled non-paid order"
                );
                return Ok(ReconcilePaymentResult::Anomaly { order_id: order.id });
            }
            return Ok(ReconcilePaymentResult::AlreadyHandled { order_id: order.id });
        }

        match event.outcome {
            PaymentOutcome::Approved => {
                if !amount_matches(order.total_cents, event.amount_cents) {
                    return self
                        .settle_failed(
                            &event.order_id,
                            FailureReason::AmountMismatch {
                                expected_cents: order.total_cents,
                                reported_cents: event.amount_cents,
                            },
                        )
                        .await;
                }

                match self
                    .orders
                    .transition_to_paid(&event.order_id, Timestamp::now(), &event.payment_id)
                    .await?
                {
                    Transition::Applied(paid_order) => {
                        tracing::info!(
                            order_id = %paid_order.id,
                            payment_id = %event.payment_id,
                            amount_cents = event.amount_cents,
                            "Order paid"
                        );
                        Ok(self.provision(&paid_order).await)
                    }
                    Transition::NotPending(order) => {
                        Ok(ReconcilePaymentResult::AlreadyHandled { order_id: order.id })
                    }
                }
            }
            PaymentOutcome::Rejected => {
                self.settle_failed(
                    &event.order_id,
                    FailureReason::GatewayDeclined {
                        detail: format!("Payment {} rejected", event.payment_id),
                    },
                )
                .await
            }
            PaymentOutcome::Cancelled => {
                self.settle_failed(
                    &event.order_id,
                    FailureReason::GatewayDeclined {
                        detail: format!("Payment {} cancelled", event.payment_id),
                    },
                )
                .await
            }
            PaymentOutcome::InProgress(status) => {
                tracing::info!(
                    order_id = %order.id,
                    payment_id = %event.payment_id,
                    gateway_status = %status,
                    "Non-final payment status acknowledged"
                );
                Ok(ReconcilePaymentResult::Acknowledged { order_id: order.id })
            }
        }
    }

    async fn settle_failed(
        &self,
        order_id: &OrderId,
        reason: FailureReason,
    ) -> Result<ReconcilePaymentResult, DomainError> {
        match self.orders.transition_to_failed(order_id, &reason).await? {
            Transition::Applied(order) => match reason {
                FailureReason::AmountMismatch {
                    expected_cents,
                    reported_cents,
                } => {
                    tracing::warn!(
                        order_id = %order.id,
                        expected_cents,
                        reported_cents,
                        "Approved amount mismatch, order failed"
                    );
                    Ok(ReconcilePaymentResult::AmountMismatch {
                        order_id: order.id,
                        expected_cents,
                        reported_cents,
                    })
                }
                FailureReason::GatewayDeclined { detail } => {
                    tracing::info!(order_id = %order.id, detail = %detail, "Order failed");
                    Ok(ReconcilePaymentResult::Failed { order_id: order.id })
                }
            },
            Transition::NotPending(order) => {
                Ok(ReconcilePaymentResult::AlreadyHandled { order_id: order.id })
            }
        }
    }

    async fn provision(&self, order: &crate::domain::order::Order) -> ReconcilePaymentResult {
        match provision_domain(&self.registry, order).await {
            ProvisionOutcome::Provisioned { record_id }
            | ProvisionOutcome::AlreadyProvisioned { record_id } => {
                ReconcilePaymentResult::Provisioned {
                    order_id: order.id,
                    record_id,
                }
            }
            ProvisionOutcome::Deferred => {
                ReconcilePaymentResult::ProvisioningDeferred { order_id: order.id }
            }
            ProvisionOutcome::DuplicateActive => {
                ReconcilePaymentResult::DuplicateActiveDomain { order_id: order.id }
            }
            ProvisionOutcome::Failed { error } => ReconcilePaymentResult::PaidButUnprovisioned {
                order_id: order.id,
                error,
            },
        }
    }
}
