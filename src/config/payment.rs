//! Payment gateway configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Mercado Pago configuration.
///
/// An empty access token is allowed: the gateway then reports itself as
/// unconfigured and payment operations degrade gracefully instead of
/// failing at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Mercado Pago access token
    #[serde(default)]
    pub access_token: String,

    /// Mercado Pago REST API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Subscription checkout base URL
    #[serde(default = "default_checkout_base_url")]
    pub checkout_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Allow simulated payment approval without contacting the gateway
    #[serde(default)]
    pub enable_simulation: bool,
}

impl PaymentConfig {
    /// Validate payment configuration for the given environment
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        validate_url(&self.api_base_url, "payment.api_base_url")?;
        validate_url(&self.checkout_base_url, "payment.checkout_base_url")?;
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.enable_simulation && environment == Environment::Production {
            return Err(ValidationError::SimulationForbiddenInProduction);
        }
        Ok(())
    }

    /// Simulation is only effective outside production
    pub fn simulation_enabled(&self, environment: Environment) -> bool {
        self.enable_simulation && environment != Environment::Production
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            api_base_url: default_api_base_url(),
            checkout_base_url: default_checkout_base_url(),
            timeout_secs: default_timeout(),
            enable_simulation: false,
        }
    }
}

fn validate_url(url: &str, field: &'static str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl(field))
    }
}

fn default_api_base_url() -> String {
    "https://api.mercadopago.com".to_string()
}

fn default_checkout_base_url() -> String {
    "https://www.mercadopago.com.ar/subscriptions/checkout".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PaymentConfig::default();
        assert!(config.validate(Environment::Development).is_ok());
        assert!(config.access_token.is_empty());
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let config = PaymentConfig {
            api_base_url: "ftp://api.example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(Environment::Development),
            Err(ValidationError::InvalidUrl("payment.api_base_url"))
        ));
    }

    #[test]
    fn test_simulation_forbidden_in_production() {
        let config = PaymentConfig {
            enable_simulation: true,
            ..Default::default()
        };
        assert!(config.validate(Environment::Development).is_ok());
        assert!(matches!(
            config.validate(Environment::Production),
            Err(ValidationError::SimulationForbiddenInProduction)
        ));
    }

    #[test]
    fn test_simulation_enabled_only_outside_production() {
        let config = PaymentConfig {
            enable_simulation: true,
            ..Default::default()
        };
        assert!(config.simulation_enabled(Environment::Development));
        assert!(config.simulation_enabled(Environment::Staging));
        assert!(!config.simulation_enabled(Environment::Production));
    }
}
