//! RDAP client implementing the availability checker port.
//!
//! RDAP answers 404 for unregistered domains and 200 with a registration
//! object otherwise. Any other answer is an error surfaced to the caller,
//! never reported as availability.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{Availability, AvailabilityChecker};

/// RDAP endpoint configuration.
#[derive(Debug, Clone)]
pub struct RdapConfig {
    /// Base URL of the RDAP service, e.g. `https://rdap.nic.ar`.
    base_url: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl RdapConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Availability checker backed by an RDAP service.
pub struct RdapClient {
    config: RdapConfig,
    http_client: reqwest::Client,
}

impl RdapClient {
    pub fn new(config: RdapConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AvailabilityChecker for RdapClient {
    async fn check(&self, name: &str, suffix: &str) -> Result<Availability, DomainError> {
        let url = format!(
            "{}/domain/{}.{}",
            self.config.base_url.trim_end_matches('/'),
            name,
            suffix
        );

        let response = self
            .http_client
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(domain = %format!("{}.{}", name, suffix), error = %e, "RDAP lookup failed");
                DomainError::new(
                    ErrorCode::ExternalServiceError,
                    format!("Availability lookup failed: {}", e),
                )
            })?;

        match response.status() {
            reqwest::StatusCode::NOT_FOUND => Ok(Availability::Available),
            status if status.is_success() => Ok(Availability::Registered),
            status => {
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(%status, error = %body, "RDAP answered with an error status");
                Err(DomainError::new(
                    ErrorCode::ExternalServiceError,
                    format!("Availability lookup returned {}", status),
                ))
            }
        }
    }
}
