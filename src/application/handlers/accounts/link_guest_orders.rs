//! LinkGuestOrdersHandler - attaches paid guest orders to a new account.

use std::sync::Arc;

use crate::application::handlers::reconciliation::{provision_domain, ProvisionOutcome};
use crate::domain::foundation::{AccountId, DomainError, OrderId};
use crate::ports::{DomainRegistry, OrderStore};

/// Command issued when an account is created, carrying the verified pair
/// of account id and email.
#[derive(Debug, Clone)]
pub struct LinkGuestOrdersCommand {
    pub account_id: AccountId,
    pub email: String,
}

/// Result of a linking run.
#[derive(Debug, Clone, Default)]
pub struct LinkGuestOrdersResult {
    /// Orders attached to the account in this run.
    pub linked_orders: Vec<OrderId>,
    /// Domains newly provisioned in this run.
    pub provisioned: usize,
    /// Orders that already had a registration record.
    pub already_provisioned: usize,
    /// Orders whose provisioning was flagged or failed; they stay Paid.
    pub flagged: usize,
}

/// Handler that claims paid ownerless orders for a freshly created account.
///
/// Matching is by guest email. Idempotent: a second run finds no ownerless
/// orders, and the per-order record check stops duplicate registrations.
pub struct LinkGuestOrdersHandler {
    orders: Arc<dyn OrderStore>,
    registry: Arc<dyn DomainRegistry>,
}

impl LinkGuestOrdersHandler {
    pub fn new(orders: Arc<dyn OrderStore>, registry: Arc<dyn DomainRegistry>) -> Self {
        Self { orders, registry }
    }

    pub async fn handle(
        &self,
        cmd: LinkGuestOrdersCommand,
    ) -> Result<LinkGuestOrdersResult, DomainError> {
        if cmd.email.trim().is_empty() {
            return Err(DomainError::validation("email", "Email cannot be empty"));
        }

        let candidates = self
            .orders
            .find_paid_ownerless_by_email(cmd.email.trim())
            .await?;

        let mut result = LinkGuestOrdersResult::default();

        for mut order in candidates {
            // Conditional on the order still being ownerless; a concurrent
            // linking run for the same email loses here and moves on.
            if !self.orders.link_account(&order.id, &cmd.account_id).await? {
                continue;
            }
            order.attach_account(cmd.account_id.clone())?;
            result.linked_orders.push(order.id);

            match provision_domain(&self.registry, &order).await {
                ProvisionOutcome::Provisioned { .. } => result.provisioned += 1,
                ProvisionOutcome::AlreadyProvisioned { .. } => result.already_provisioned += 1,
                ProvisionOutcome::Deferred
                | ProvisionOutcome::DuplicateActive
                | ProvisionOutcome::Failed { .. } => result.flagged += 1,
            }
        }

        tracing::info!(
            account_id = %cmd.account_id,
            linked = result.linked_orders.len(),
            provisioned = result.provisioned,
            already_provisioned = result.already_provisioned,
            flagged = result.flagged,
            "Guest order linking run finished"
        );

        Ok(result)
    }
}
