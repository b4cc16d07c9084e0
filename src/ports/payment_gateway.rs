//! Payment gateway port.
//!
//! Defines the contract for the external payment provider. The gateway is
//! the source of truth for payment details: webhook notifications only
//! carry a payment id, and the full payment is fetched through this port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, OrderId};

/// Port for the payment gateway integration.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Whether the gateway has credentials configured.
    ///
    /// An unconfigured gateway degrades checkout with an explicit error
    /// instead of failing on the first outbound call.
    fn is_configured(&self) -> bool;

    /// Fetches a payment by the gateway's payment id.
    async fn get_payment(&self, payment_id: &str) -> Result<GatewayPayment, GatewayError>;

    /// Builds the hosted checkout URL for a subscription plan, carrying the
    /// order id as the gateway's `external_reference`.
    fn checkout_url(&self, plan_ref: &str, order_id: &OrderId, domain: &str) -> String;
}

/// Payment details as reported by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayPayment {
    /// Gateway payment id.
    pub id: String,
    /// Raw gateway status string (`approved`, `rejected`, ...).
    pub status: String,
    /// Correlation value set at checkout; our order id.
    pub external_reference: Option<String>,
    /// Transaction amount in cents.
    pub amount_cents: i64,
}

/// Errors from gateway operations.
#[derive(Debug, Clone)]
pub struct GatewayError {
    pub code: GatewayErrorCode,
    pub message: String,
    /// Whether the operation can be safely retried.
    pub retryable: bool,
}

impl GatewayError {
    /// Creates a new gateway error.
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            retryable: code.is_retryable(),
            code,
            message: message.into(),
        }
    }

    /// Network or timeout failure reaching the gateway.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Network, message)
    }

    /// The gateway does not know this payment.
    pub fn payment_not_found(payment_id: &str) -> Self {
        Self::new(
            GatewayErrorCode::NotFound,
            format!("Payment {} not found", payment_id),
        )
    }

    /// The gateway answered with an error or an unusable body.
    pub fn api(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Api, message)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

impl From<GatewayError> for DomainError {
    fn from(err: GatewayError) -> Self {
        // An unknown payment id is unresolvable, not a gateway outage;
        // answering 404 stops the gateway from retrying the delivery.
        let code = match err.code {
            GatewayErrorCode::NotFound => ErrorCode::PaymentNotFound,
            GatewayErrorCode::Network | GatewayErrorCode::Api => ErrorCode::ExternalServiceError,
        };
        DomainError::new(code, err.message).with_detail("retryable", err.retryable.to_string())
    }
}

/// Gateway error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorCode {
    /// Connectivity or timeout.
    Network,
    /// Payment unknown to the gateway.
    NotFound,
    /// Gateway API error.
    Api,
}

impl GatewayErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayErrorCode::Network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn network_errors_are_retryable() {
        assert!(GatewayError::network("timeout").retryable);
        assert!(!GatewayError::payment_not_found("123").retryable);
        assert!(!GatewayError::api("500").retryable);
    }

    #[test]
    fn gateway_error_converts_to_domain_error() {
        let err: DomainError = GatewayError::network("timeout").into();
        assert_eq!(err.code, ErrorCode::ExternalServiceError);

        let err: DomainError = GatewayError::api("500").into();
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
    }

    #[test]
    fn unknown_payment_converts_to_not_found() {
        let err: DomainError = GatewayError::payment_not_found("123").into();
        assert_eq!(err.code, ErrorCode::PaymentNotFound);
    }
}
