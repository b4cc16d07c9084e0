//! PostgreSQL implementation of the domain registry.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    AccountId, DomainError, DomainRecordId, ErrorCode, OrderId, Timestamp,
};
use crate::domain::registry::{DomainRecord, DomainStatus};
use crate::ports::DomainRegistry;

const DOMAIN_COLUMNS: &str = "id, owner_account_id, domain, suffix, status, registered_at, \
     expires_at, auto_renew, alerts_enabled, order_id";

/// PostgreSQL implementation of DomainRegistry.
#[derive(Clone)]
pub struct PostgresDomainRegistry {
    pool: PgPool,
}

impl PostgresDomainRegistry {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DomainRegistry for PostgresDomainRegistry {
    async fn insert(&self, record: &DomainRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO domains (
                id, owner_account_id, domain, suffix, status, registered_at,
                expires_at, auto_renew, alerts_enabled, order_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.owner.as_str())
        .bind(&record.domain)
        .bind(&record.suffix)
        .bind(status_to_str(record.status))
        .bind(record.registered_at.as_datetime())
        .bind(record.expires_at.as_datetime())
        .bind(record.auto_renew)
        .bind(record.alerts_enabled)
        .bind(record.order_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to insert domain record: {}", e)))?;

        Ok(())
    }

    async fn find_by_order(
        &self,
        order_id: &OrderId,
    ) -> Result<Option<DomainRecord>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM domains WHERE order_id = $1",
            DOMAIN_COLUMNS
        ))
        .bind(order_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to fetch domain by order: {}", e)))?;

        row.map(|r| row_to_record(&r)).transpose()
    }

    async fn find_active(
        &self,
        domain: &str,
        suffix: &str,
    ) -> Result<Option<DomainRecord>, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM domains
            WHERE domain = $1 AND suffix = $2 AND status = 'active'
            "#,
            DOMAIN_COLUMNS
        ))
        .bind(domain)
        .bind(suffix)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to fetch active domain: {}", e)))?;

        row.map(|r| row_to_record(&r)).transpose()
    }

    async fn list_by_owner(&self, owner: &AccountId) -> Result<Vec<DomainRecord>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM domains
            WHERE owner_account_id = $1
            ORDER BY registered_at ASC
            "#,
            DOMAIN_COLUMNS
        ))
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to fetch owned domains: {}", e)))?;

        rows.iter().map(row_to_record).collect()
    }
}

fn database_error(message: String) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, message)
}

fn status_to_str(status: DomainStatus) -> &'static str {
    match status {
        DomainStatus::Pending => "pending",
        DomainStatus::Active => "active",
        DomainStatus::Expiring => "expiring",
        DomainStatus::Expired => "expired",
    }
}

fn str_to_status(s: &str) -> Result<DomainStatus, DomainError> {
    match s {
        "pending" => Ok(DomainStatus::Pending),
        "active" => Ok(DomainStatus::Active),
        "expiring" => Ok(DomainStatus::Expiring),
        "expired" => Ok(DomainStatus::Expired),
        other => Err(database_error(format!("Unknown domain status '{}'", other))),
    }
}

fn row_to_record(row: &PgRow) -> Result<DomainRecord, DomainError> {
    let id: uuid::Uuid = row.get("id");
    let owner: String = row.get("owner_account_id");
    let status: String = row.get("status");
    let registered_at: chrono::DateTime<chrono::Utc> = row.get("registered_at");
    let expires_at: chrono::DateTime<chrono::Utc> = row.get("expires_at");
    let order_id: uuid::Uuid = row.get("order_id");

    Ok(DomainRecord {
        id: DomainRecordId::from_uuid(id),
        owner: AccountId::new(owner)?,
        domain: row.get("domain"),
        suffix: row.get("suffix"),
        status: str_to_status(&status)?,
        registered_at: Timestamp::from_datetime(registered_at),
        expires_at: Timestamp::from_datetime(expires_at),
        auto_renew: row.get("auto_renew"),
        alerts_enabled: row.get("alerts_enabled"),
        order_id: OrderId::from_uuid(order_id),
    })
}
