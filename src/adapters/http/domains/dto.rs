//! Request/response DTOs for domain endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainRecordId, Timestamp};
use crate::domain::registry::{DomainRecord, DomainStatus};

/// Query parameters for the availability check.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckDomainParams {
    /// Domain label without the suffix, e.g. `example`.
    pub name: String,
    /// Zone suffix. Defaults to `com.ar`.
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckDomainResponse {
    pub domain: String,
    pub available: bool,
}

/// Registration record view returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRecordResponse {
    pub id: DomainRecordId,
    pub domain: String,
    pub status: DomainStatus,
    pub registered_at: Timestamp,
    pub expires_at: Timestamp,
    pub auto_renew: bool,
    pub alerts_enabled: bool,
}

impl From<DomainRecord> for DomainRecordResponse {
    fn from(record: DomainRecord) -> Self {
        Self {
            id: record.id,
            domain: record.full_name(),
            status: record.status,
            registered_at: record.registered_at,
            expires_at: record.expires_at,
            auto_renew: record.auto_renew,
            alerts_enabled: record.alerts_enabled,
        }
    }
}

/// GET /api/domains response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedDomainsResponse {
    pub count: usize,
    pub domains: Vec<DomainRecordResponse>,
}
