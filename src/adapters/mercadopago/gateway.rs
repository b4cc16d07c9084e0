//! Mercado Pago payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the Mercado Pago REST API.
//! Payments are always re-fetched from the API; webhook bodies are treated
//! as untrusted pointers only.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use crate::domain::foundation::OrderId;
use crate::ports::{GatewayError, GatewayPayment, PaymentGateway};

/// Mercado Pago API configuration.
#[derive(Debug, Clone)]
pub struct MercadoPagoConfig {
    /// API access token. Empty means the gateway is not configured.
    access_token: String,
    /// Base URL for the REST API.
    api_base_url: String,
    /// Base URL for the hosted subscription checkout page.
    checkout_base_url: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl MercadoPagoConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_base_url: "https://api.mercadopago.com".to_string(),
            checkout_base_url: "https://www.mercadopago.com.ar/subscriptions/checkout"
                .to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set a custom checkout base URL.
    pub fn with_checkout_base_url(mut self, url: impl Into<String>) -> Self {
        self.checkout_base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Payment as returned by `GET /v1/payments/{id}`.
///
/// Amounts come back in currency units; the domain works in cents.
#[derive(Debug, Deserialize)]
struct PaymentResponse {
    id: serde_json::Value,
    status: String,
    external_reference: Option<String>,
    transaction_amount: f64,
}

/// Mercado Pago gateway adapter.
pub struct MercadoPagoGateway {
    config: MercadoPagoConfig,
    http_client: reqwest::Client,
}

impl MercadoPagoGateway {
    pub fn new(config: MercadoPagoConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for MercadoPagoGateway {
    fn is_configured(&self) -> bool {
        !self.config.access_token.trim().is_empty()
    }

    async fn get_payment(&self, payment_id: &str) -> Result<GatewayPayment, GatewayError> {
        let url = format!("{}/v1/payments/{}", self.config.api_base_url, payment_id);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::payment_not_found(payment_id));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, error = %body, "Mercado Pago payment lookup failed");
            return Err(GatewayError::api(format!(
                "Payment lookup returned {}: {}",
                status, body
            )));
        }

        let payment: PaymentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::api(format!("Unusable payment body: {}", e)))?;

        Ok(GatewayPayment {
            id: json_id_to_string(&payment.id),
            status: payment.status,
            external_reference: payment.external_reference,
            amount_cents: (payment.transaction_amount * 100.0).round() as i64,
        })
    }

    fn checkout_url(&self, plan_ref: &str, order_id: &OrderId, domain: &str) -> String {
        let params = [
            ("preapproval_plan_id", plan_ref.to_string()),
            ("external_reference", order_id.to_string()),
            ("reason", format!("Dominio: {}", domain)),
        ];
        Url::parse_with_params(&self.config.checkout_base_url, &params)
            .map(String::from)
            .unwrap_or_else(|_| self.config.checkout_base_url.clone())
    }
}

/// Mercado Pago sends payment ids as JSON numbers; webhooks and tooling
/// sometimes carry them as strings.
fn json_id_to_string(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(token: &str) -> MercadoPagoGateway {
        MercadoPagoGateway::new(MercadoPagoConfig::new(token))
    }

    #[test]
    fn configured_only_with_nonempty_token() {
        assert!(gateway("TEST-token").is_configured());
        assert!(!gateway("").is_configured());
        assert!(!gateway("   ").is_configured());
    }

    #[test]
    fn checkout_url_carries_plan_order_and_reason() {
        let order_id = OrderId::new();
        let url = gateway("TEST-token").checkout_url(
            "b21689b7fa8e48839d591d23b87f2f1b",
            &order_id,
            "example.com.ar",
        );

        assert!(url.starts_with("https://www.mercadopago.com.ar/subscriptions/checkout?"));
        assert!(url.contains("preapproval_plan_id=b21689b7fa8e48839d591d23b87f2f1b"));
        assert!(url.contains(&format!("external_reference={}", order_id)));
        assert!(url.contains("reason=Dominio"));
        // The space in the reason must be encoded
        assert!(!url.contains(' '));
    }

    #[test]
    fn payment_response_parses_numeric_id_and_unit_amount() {
        let json = r#"{
            "id": 12345678901,
            "status": "approved",
            "external_reference": "3f2c0e36-9d6c-4f6e-8f0a-1c2d3e4f5a6b",
            "transaction_amount": 70800.0
        }"#;
        let payment: PaymentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(json_id_to_string(&payment.id), "12345678901");
        assert_eq!((payment.transaction_amount * 100.0).round() as i64, 7_080_000);
    }

    #[test]
    fn payment_response_tolerates_string_id_and_missing_reference() {
        let json = r#"{
            "id": "12345678901",
            "status": "rejected",
            "transaction_amount": 5900.0
        }"#;
        let payment: PaymentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(json_id_to_string(&payment.id), "12345678901");
        assert!(payment.external_reference.is_none());
    }
}
