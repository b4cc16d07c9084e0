//! RDAP lookup configuration

use serde::Deserialize;

use super::error::ValidationError;

/// RDAP availability lookup configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RdapConfig {
    /// RDAP service base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl RdapConfig {
    /// Validate registry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidUrl("rdap.base_url"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for RdapConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://rdap.nic.ar".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RdapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, "https://rdap.nic.ar");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let config = RdapConfig {
            base_url: "rdap.nic.ar".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidUrl("rdap.base_url"))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = RdapConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }
}
