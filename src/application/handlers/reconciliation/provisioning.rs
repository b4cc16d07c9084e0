//! Domain provisioning step shared by reconciliation and guest-order linking.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, DomainRecordId};
use crate::domain::order::Order;
use crate::domain::registry::{split_domain, DomainRecord};
use crate::ports::DomainRegistry;

/// Outcome of attempting to provision a domain for a paid order.
#[derive(Debug, Clone)]
pub enum ProvisionOutcome {
    /// A new registration record was created.
    Provisioned { record_id: DomainRecordId },
    /// A record for this order already exists; nothing was written.
    AlreadyProvisioned { record_id: DomainRecordId },
    /// The order has no owning account; provisioning waits for linking.
    Deferred,
    /// Another Active record already holds this domain. Flagged, not written.
    DuplicateActive,
    /// The registry write failed. The order stays Paid; the write is
    /// retryable without touching payment state.
    Failed { error: DomainError },
}

/// Provisions the domain purchased by a Paid order, exactly once.
///
/// Idempotency is keyed on the order id: re-running for the same order
/// finds the existing record and writes nothing.
pub(crate) async fn provision_domain(
    registry: &Arc<dyn DomainRegistry>,
    order: &Order,
) -> ProvisionOutcome {
    let owner = match order.owner() {
        Some(owner) => owner.clone(),
        None => {
            tracing::warn!(
                order_id = %order.id,
                domain = %order.domain,
                "Paid guest order left unprovisioned until account linking"
            );
            return ProvisionOutcome::Deferred;
        }
    };

    match registry.find_by_order(&order.id).await {
        Ok(Some(existing)) => {
            return ProvisionOutcome::AlreadyProvisioned {
                record_id: existing.id,
            }
        }
        Ok(None) => {}
        Err(error) => return ProvisionOutcome::Failed { error },
    }

    let (name, suffix) = match split_domain(&order.domain) {
        Ok(parts) => parts,
        Err(e) => {
            return ProvisionOutcome::Failed {
                error: DomainError::from(e).with_detail("order_id", order.id.to_string()),
            }
        }
    };

    match registry.find_active(&name, &suffix).await {
        Ok(Some(existing)) => {
            tracing::warn!(
                order_id = %order.id,
                domain = %order.domain,
                existing_record_id = %existing.id,
                existing_order_id = %existing.order_id,
                "Active registration already exists for domain, skipping insert"
            );
            return ProvisionOutcome::DuplicateActive;
        }
        Ok(None) => {}
        Err(error) => return ProvisionOutcome::Failed { error },
    }

    let paid_at = order.paid_at.unwrap_or(order.created_at);
    let record = DomainRecord::activate(
        owner,
        name,
        suffix,
        order.id,
        order.period_months(),
        paid_at,
    );

    match registry.insert(&record).await {
        Ok(()) => {
            tracing::info!(
                order_id = %order.id,
                record_id = %record.id,
                domain = %record.full_name(),
                expires_at = ?record.expires_at,
                "Domain provisioned"
            );
            ProvisionOutcome::Provisioned {
                record_id: record.id,
            }
        }
        Err(error) => {
            tracing::error!(
                order_id = %order.id,
                domain = %order.domain,
                error = %error,
                "Registry write failed after payment, order stays paid"
            );
            ProvisionOutcome::Failed { error }
        }
    }
}
