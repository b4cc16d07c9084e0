//! Human-facing order numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Human-facing order reference, `ORD-<unix-millis>-<3 digits>`.
///
/// Sortable by creation time; the numeric suffix disambiguates orders
/// created in the same millisecond.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Generates an order number for the given creation time.
    pub fn generate(created_at: Timestamp) -> Self {
        let suffix = u16::from_be_bytes({
            let bytes = Uuid::new_v4().into_bytes();
            [bytes[0], bytes[1]]
        }) % 1000;
        Self(format!("ORD-{}-{:03}", created_at.as_unix_millis(), suffix))
    }

    /// Rehydrates an order number from storage, rejecting malformed values.
    pub fn parse(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        let mut parts = s.splitn(3, '-');
        let valid = parts.next() == Some("ORD")
            && parts.next().map_or(false, |millis| {
                !millis.is_empty() && millis.chars().all(|c| c.is_ascii_digit())
            })
            && parts.next().map_or(false, |suffix| {
                suffix.len() == 3 && suffix.chars().all(|c| c.is_ascii_digit())
            });
        if !valid {
            return Err(ValidationError::invalid_format(
                "order_number",
                format!("Expected ORD-<millis>-<3 digits>, got '{}'", s),
            ));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_expected_shape() {
        let number = OrderNumber::generate(Timestamp::now());
        let parts: Vec<&str> = number.as_str().splitn(3, '-').collect();
        assert_eq!(parts[0], "ORD");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 3);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn generate_embeds_creation_millis() {
        let now = Timestamp::now();
        let number = OrderNumber::generate(now);
        assert!(number
            .as_str()
            .starts_with(&format!("ORD-{}-", now.as_unix_millis())));
    }

    #[test]
    fn parse_accepts_generated_numbers() {
        let number = OrderNumber::generate(Timestamp::now());
        let parsed = OrderNumber::parse(number.as_str()).unwrap();
        assert_eq!(parsed, number);
    }

    #[test]
    fn parse_rejects_malformed_values() {
        assert!(OrderNumber::parse("ORD-123").is_err());
        assert!(OrderNumber::parse("ORD-abc-123").is_err());
        assert!(OrderNumber::parse("ORD-1705276800000-12").is_err());
        assert!(OrderNumber::parse("XYZ-1705276800000-123").is_err());
        assert!(OrderNumber::parse("").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let number = OrderNumber::parse("ORD-1705276800000-042").unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"ORD-1705276800000-042\"");
    }
}
