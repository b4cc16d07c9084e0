//! HTTP handlers for payment gateway webhooks.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::mercadopago::WebhookNotification;
use crate::application::handlers::reconciliation::ReconcilePaymentCommand;
use crate::domain::foundation::{DomainError, OrderId};
use crate::domain::reconciliation::{PaymentEvent, PaymentOutcome};

use super::super::error::ApiError;
use super::super::state::AppState;
use super::super::reconcile_status_label;
use super::dto::WebhookAckResponse;

/// POST /api/webhooks/mercadopago - asynchronous payment notifications.
///
/// The notification body is untrusted; the payment is re-fetched from the
/// gateway and only then normalized into a reconciliation event. Non-payment
/// notifications are acknowledged without side effects.
pub async fn mercadopago_webhook(
    State(state): State<AppState>,
    Json(notification): Json<WebhookNotification>,
) -> Result<impl IntoResponse, ApiError> {
    if !notification.is_payment() {
        tracing::debug!(
            kind = ?notification.kind,
            action = ?notification.action,
            "Ignoring non-payment notification"
        );
        return Ok(Json(WebhookAckResponse::ignored()));
    }

    let payment_id = notification
        .payment_id()
        .ok_or_else(|| DomainError::validation("data.id", "Notification carries no payment id"))?;

    let payment = state
        .gateway
        .get_payment(&payment_id)
        .await
        .map_err(DomainError::from)?;

    let order_id: OrderId = payment
        .external_reference
        .as_deref()
        .and_then(|r| r.parse().ok())
        .ok_or_else(|| {
            DomainError::validation(
                "external_reference",
                "Payment carries no usable order reference",
            )
        })?;

    let event = PaymentEvent {
        order_id,
        payment_id: payment.id,
        amount_cents: payment.amount_cents,
        outcome: PaymentOutcome::from_gateway_status(&payment.status),
    };

    let handler = state.reconcile_payment_handler();
    let result = handler.handle(ReconcilePaymentCommand { event }).await?;

    Ok(Json(WebhookAckResponse::processed(reconcile_status_label(
        &result,
    ))))
}
