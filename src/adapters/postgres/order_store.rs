//! PostgreSQL implementation of the order store.
//!
//! Settlement transitions are single conditional UPDATEs on
//! `status = 'pending'`, so concurrent webhook deliveries cannot both win.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::catalog::BillingPeriod;
use crate::domain::foundation::{
    AccountId, DomainError, ErrorCode, OrderId, Timestamp,
};
use crate::domain::order::{
    Buyer, FailureReason, GuestContact, Order, OrderNumber, OrderStatus,
};
use crate::ports::{OrderStore, Transition};

const ORDER_COLUMNS: &str = "id, order_number, domain, period, amount_cents, discount_cents, \
     total_cents, payment_method, plan_ref, buyer_account_id, guest_name, guest_email, \
     guest_phone, guest_company, guest_tax_id, linked_account_id, status, created_at, \
     paid_at, payment_ref, failure_reason";

/// PostgreSQL implementation of OrderStore.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn reread(&self, id: &OrderId) -> Result<Order, DomainError> {
        self.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::OrderNotFound, format!("Order {} not found", id))
        })
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn create(&self, order: &Order) -> Result<(), DomainError> {
        let guest = order.buyer.guest_contact();
        sqlx::query(
            r#"
            INSERT INTO orders (
                id, order_number, domain, period, amount_cents, discount_cents,
                total_cents, payment_method, plan_ref, buyer_account_id,
                guest_name, guest_email, guest_phone, guest_company, guest_tax_id,
                linked_account_id, status, created_at, paid_at, payment_ref,
                failure_reason
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                      $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(order.order_number.as_str())
        .bind(&order.domain)
        .bind(order.period.as_str())
        .bind(order.amount_cents)
        .bind(order.discount_cents)
        .bind(order.total_cents)
        .bind(&order.payment_method)
        .bind(order.plan_ref.as_deref())
        .bind(order.buyer.account_id().map(|a| a.as_str()))
        .bind(guest.map(|g| g.name.as_str()))
        .bind(guest.map(|g| g.email.as_str()))
        .bind(guest.map(|g| g.phone.as_str()))
        .bind(guest.and_then(|g| g.company.as_deref()))
        .bind(guest.and_then(|g| g.tax_id.as_deref()))
        .bind(order.linked_account.as_ref().map(|a| a.as_str()))
        .bind(status_to_str(order.status))
        .bind(order.created_at.as_datetime())
        .bind(order.paid_at.map(|t| *t.as_datetime()))
        .bind(order.payment_ref.as_deref())
        .bind(
            order
                .failure_reason
                .as_ref()
                .map(serde_json::to_value)
                .transpose()
                .map_err(|e| database_error(format!("Failed to encode failure reason: {}", e)))?,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to insert order: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM orders WHERE id = $1",
            ORDER_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to fetch order: {}", e)))?;

        row.map(|r| row_to_order(&r)).transpose()
    }

    async fn transition_to_paid(
        &self,
        id: &OrderId,
        paid_at: Timestamp,
        payment_ref: &str,
    ) -> Result<Transition, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE orders
            SET status = 'paid', paid_at = $2, payment_ref = $3
            WHERE id = $1 AND status = 'pending'
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(paid_at.as_datetime())
        .bind(payment_ref)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to mark order paid: {}", e)))?;

        match row {
            Some(row) => Ok(Transition::Applied(row_to_order(&row)?)),
            None => Ok(Transition::NotPending(self.reread(id).await?)),
        }
    }

    async fn transition_to_failed(
        &self,
        id: &OrderId,
        reason: &FailureReason,
    ) -> Result<Transition, DomainError> {
        let reason_json = serde_json::to_value(reason)
            .map_err(|e| database_error(format!("Failed to encode failure reason: {}", e)))?;

        let row = sqlx::query(&format!(
            r#"
            UPDATE orders
            SET status = 'failed', failure_reason = $2
            WHERE id = $1 AND status = 'pending'
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(reason_json)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to mark order failed: {}", e)))?;

        match row {
            Some(row) => Ok(Transition::Applied(row_to_order(&row)?)),
            None => Ok(Transition::NotPending(self.reread(id).await?)),
        }
    }

    async fn link_account(
        &self,
        id: &OrderId,
        account_id: &AccountId,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET linked_account_id = $2
            WHERE id = $1 AND buyer_account_id IS NULL AND linked_account_id IS NULL
            "#,
        )
        .bind(id.as_uuid())
        .bind(account_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to link account: {}", e)))?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }
        // Distinguish an already-owned order from a missing one.
        self.reread(id).await?;
        Ok(false)
    }

    async fn find_paid_ownerless_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM orders
            WHERE status = 'paid'
              AND buyer_account_id IS NULL
              AND linked_account_id IS NULL
              AND lower(guest_email) = lower($1)
            ORDER BY created_at ASC
            "#,
            ORDER_COLUMNS
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to fetch guest orders: {}", e)))?;

        rows.iter().map(row_to_order).collect()
    }

    async fn list_pending_older_than(
        &self,
        cutoff: Timestamp,
    ) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM orders
            WHERE status = 'pending' AND created_at < $1
            ORDER BY created_at ASC
            "#,
            ORDER_COLUMNS
        ))
        .bind(cutoff.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to fetch stale orders: {}", e)))?;

        rows.iter().map(row_to_order).collect()
    }

    async fn list_by_owner(&self, owner: &AccountId) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM orders
            WHERE buyer_account_id = $1 OR linked_account_id = $1
            ORDER BY created_at DESC
            "#,
            ORDER_COLUMNS
        ))
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error(format!("Failed to fetch owned orders: {}", e)))?;

        rows.iter().map(row_to_order).collect()
    }
}

fn database_error(message: String) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, message)
}

fn status_to_str(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "pending",
        OrderStatus::Paid => "paid",
        OrderStatus::Failed => "failed",
        OrderStatus::Cancelled => "cancelled",
    }
}

fn str_to_status(s: &str) -> Result<OrderStatus, DomainError> {
    match s {
        "pending" => Ok(OrderStatus::Pending),
        "paid" => Ok(OrderStatus::Paid),
        "failed" => Ok(OrderStatus::Failed),
        "cancelled" => Ok(OrderStatus::Cancelled),
        other => Err(database_error(format!("Unknown order status '{}'", other))),
    }
}

fn row_to_order(row: &PgRow) -> Result<Order, DomainError> {
    let id: uuid::Uuid = row.get("id");
    let order_number: String = row.get("order_number");
    let period: String = row.get("period");
    let status: String = row.get("status");
    let buyer_account_id: Option<String> = row.get("buyer_account_id");
    let linked_account_id: Option<String> = row.get("linked_account_id");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let paid_at: Option<chrono::DateTime<chrono::Utc>> = row.get("paid_at");
    let failure_reason: Option<serde_json::Value> = row.get("failure_reason");

    let buyer = match buyer_account_id {
        Some(account_id) => Buyer::account(AccountId::new(account_id)?),
        None => Buyer::guest(GuestContact {
            name: row.get("guest_name"),
            email: row.get("guest_email"),
            phone: row.get("guest_phone"),
            company: row.get("guest_company"),
            tax_id: row.get("guest_tax_id"),
        }),
    };

    Ok(Order {
        id: OrderId::from_uuid(id),
        order_number: OrderNumber::parse(order_number)?,
        domain: row.get("domain"),
        period: period.parse::<BillingPeriod>()?,
        amount_cents: row.get("amount_cents"),
        discount_cents: row.get("discount_cents"),
        total_cents: row.get("total_cents"),
        payment_method: row.get("payment_method"),
        plan_ref: row.get("plan_ref"),
        buyer,
        linked_account: linked_account_id.map(AccountId::new).transpose()?,
        status: str_to_status(&status)?,
        created_at: Timestamp::from_datetime(created_at),
        paid_at: paid_at.map(Timestamp::from_datetime),
        payment_ref: row.get("payment_ref"),
        failure_reason: failure_reason
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| database_error(format!("Unreadable failure reason: {}", e)))?,
    })
}
