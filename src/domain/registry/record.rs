//! Domain registration records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AccountId, DomainRecordId, OrderId, Timestamp, ValidationError,
};

use super::DomainStatus;

/// Number of registration years purchased by a period of `months`.
///
/// Partial years round up: a 1-month plan still registers the domain
/// for a full calendar year.
pub fn registration_years(months: u32) -> u32 {
    ((months + 11) / 12).max(1)
}

/// Splits a full domain string into label and suffix at the first dot.
pub fn split_domain(full: &str) -> Result<(String, String), ValidationError> {
    let full = full.trim();
    match full.split_once('.') {
        Some((name, suffix)) if !name.is_empty() && !suffix.is_empty() => {
            Ok((name.to_string(), suffix.to_string()))
        }
        _ => Err(ValidationError::invalid_format(
            "domain",
            format!("Expected <name>.<suffix>, got '{}'", full),
        )),
    }
}

/// A registered domain owned by an account.
///
/// Created only by the payment reconciliation workflow or the guest-order
/// linking step, never from client input. The `order_id` records which paid
/// order produced this registration, which is what makes provisioning
/// idempotent under duplicate payment notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub id: DomainRecordId,
    pub owner: AccountId,
    /// Domain label, e.g. `example`.
    pub domain: String,
    /// Zone suffix, e.g. `com.ar`.
    pub suffix: String,
    pub status: DomainStatus,
    pub registered_at: Timestamp,
    pub expires_at: Timestamp,
    pub auto_renew: bool,
    pub alerts_enabled: bool,
    /// The paid order that produced this registration.
    pub order_id: OrderId,
}

impl DomainRecord {
    /// Creates an Active registration for a paid order.
    pub fn activate(
        owner: AccountId,
        domain: impl Into<String>,
        suffix: impl Into<String>,
        order_id: OrderId,
        period_months: u32,
        now: Timestamp,
    ) -> Self {
        let years = registration_years(period_months);
        Self {
            id: DomainRecordId::new(),
            owner,
            domain: domain.into(),
            suffix: suffix.into(),
            status: DomainStatus::Active,
            registered_at: now,
            expires_at: now.add_calendar_years(years as i32),
            auto_renew: false,
            alerts_enabled: true,
            order_id,
        }
    }

    /// Full domain string, label and suffix joined.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.domain, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Datelike, Utc};

    fn ts(rfc3339: &str) -> Timestamp {
        let dt = DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    fn owner() -> AccountId {
        AccountId::new("acct-1").unwrap()
    }

    #[test]
    fn registration_years_rounds_partial_years_up() {
        assert_eq!(registration_years(1), 1);
        assert_eq!(registration_years(11), 1);
        assert_eq!(registration_years(12), 1);
        assert_eq!(registration_years(13), 2);
        assert_eq!(registration_years(24), 2);
    }

    #[test]
    fn registration_years_never_below_one() {
        assert_eq!(registration_years(0), 1);
    }

    #[test]
    fn split_domain_splits_at_first_dot() {
        let (name, suffix) = split_domain("example.com.ar").unwrap();
        assert_eq!(name, "example");
        assert_eq!(suffix, "com.ar");
    }

    #[test]
    fn split_domain_rejects_missing_suffix() {
        assert!(split_domain("example").is_err());
        assert!(split_domain("example.").is_err());
        assert!(split_domain(".com.ar").is_err());
    }

    #[test]
    fn activate_creates_active_record_with_defaults() {
        let record = DomainRecord::activate(
            owner(),
            "example",
            "com.ar",
            OrderId::new(),
            12,
            Timestamp::now(),
        );
        assert_eq!(record.status, DomainStatus::Active);
        assert!(!record.auto_renew);
        assert!(record.alerts_enabled);
        assert_eq!(record.full_name(), "example.com.ar");
    }

    #[test]
    fn activate_one_month_expires_after_one_calendar_year() {
        let now = ts("2026-03-10T12:00:00Z");
        let record =
            DomainRecord::activate(owner(), "example", "com.ar", OrderId::new(), 1, now);
        assert_eq!(record.expires_at.as_datetime().year(), 2027);
        assert_eq!(record.expires_at.as_datetime().month(), 3);
        assert_eq!(record.expires_at.as_datetime().day(), 10);
    }

    #[test]
    fn activate_two_years_expires_after_two_calendar_years() {
        let now = ts("2026-03-10T12:00:00Z");
        let record =
            DomainRecord::activate(owner(), "example", "com.ar", OrderId::new(), 24, now);
        assert_eq!(record.expires_at.as_datetime().year(), 2028);
    }

    #[test]
    fn activate_links_record_to_order() {
        let order_id = OrderId::new();
        let record =
            DomainRecord::activate(owner(), "example", "com.ar", order_id, 12, Timestamp::now());
        assert_eq!(record.order_id, order_id);
    }
}
