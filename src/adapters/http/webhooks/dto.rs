//! Response DTOs for webhook endpoints.

use serde::{Deserialize, Serialize};

/// Acknowledgement body. `received: true` stops gateway retries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookAckResponse {
    pub received: bool,
    /// Reconciliation outcome, present when a payment was processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl WebhookAckResponse {
    pub fn ignored() -> Self {
        Self {
            received: true,
            result: None,
        }
    }

    pub fn processed(result: impl Into<String>) -> Self {
        Self {
            received: true,
            result: Some(result.into()),
        }
    }
}
