//! Order aggregate - a purchase of a domain registration.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{BillingPeriod, BillingPlan};
use crate::domain::foundation::{
    AccountId, DomainError, ErrorCode, OrderId, StateMachine, Timestamp,
};

use super::{Buyer, OrderNumber, OrderStatus};

/// Why an order settled as Failed. Kept for support review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// Gateway reported an approved amount that does not match the order.
    AmountMismatch {
        expected_cents: i64,
        reported_cents: i64,
    },
    /// Gateway rejected or cancelled the payment.
    GatewayDeclined { detail: String },
}

/// An order for a domain registration.
///
/// Orders are financial records: they are created Pending before payment,
/// settle exactly once into a terminal status, and are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: OrderNumber,
    /// Full domain string, e.g. `example.com.ar`. Immutable.
    pub domain: String,
    pub period: BillingPeriod,
    /// Catalog price snapshot in ARS cents. Never recomputed from client input.
    pub amount_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub payment_method: String,
    /// Gateway subscription-plan id used at checkout.
    pub plan_ref: Option<String>,
    /// Who placed the order. Immutable creation-time identity.
    pub buyer: Buyer,
    /// Account attached after the fact by guest-order linking.
    pub linked_account: Option<AccountId>,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub paid_at: Option<Timestamp>,
    /// Gateway payment id, set exactly once on transition to Paid.
    pub payment_ref: Option<String>,
    pub failure_reason: Option<FailureReason>,
}

impl Order {
    /// Creates a new Pending order with pricing snapshotted from the catalog.
    pub fn create(
        domain: impl Into<String>,
        plan: &BillingPlan,
        payment_method: impl Into<String>,
        buyer: Buyer,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        let domain = domain.into();
        if domain.trim().is_empty() {
            return Err(DomainError::validation("domain", "Domain cannot be empty"));
        }

        Ok(Self {
            id: OrderId::new(),
            order_number: OrderNumber::generate(now),
            domain,
            period: plan.period,
            amount_cents: plan.total_cents,
            discount_cents: plan.discount_cents,
            total_cents: plan.charge_cents(),
            payment_method: payment_method.into(),
            plan_ref: Some(plan.plan_ref.to_string()),
            buyer,
            linked_account: None,
            status: OrderStatus::Pending,
            created_at: now,
            paid_at: None,
            payment_ref: None,
            failure_reason: None,
        })
    }

    /// Number of months of registration purchased.
    pub fn period_months(&self) -> u32 {
        self.period.months()
    }

    /// The account that owns this order, either from checkout or from linking.
    pub fn owner(&self) -> Option<&AccountId> {
        self.buyer.account_id().or(self.linked_account.as_ref())
    }

    /// Returns true if no account owns this order.
    pub fn is_ownerless(&self) -> bool {
        self.owner().is_none()
    }

    /// Marks the order as paid. Valid only from Pending.
    ///
    /// `paid_at` and `payment_ref` are set exactly once, here.
    pub fn mark_paid(
        &mut self,
        paid_at: Timestamp,
        payment_ref: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.transition_to(OrderStatus::Paid)?;
        self.paid_at = Some(paid_at);
        self.payment_ref = Some(payment_ref.into());
        Ok(())
    }

    /// Marks the order as failed, recording the reason. Valid only from Pending.
    pub fn mark_failed(&mut self, reason: FailureReason) -> Result<(), DomainError> {
        self.transition_to(OrderStatus::Failed)?;
        self.failure_reason = Some(reason);
        Ok(())
    }

    /// Attaches an account to a guest order.
    ///
    /// The creation-time buyer record stays intact; ownership is recorded
    /// alongside it so the financial record is never rewritten.
    pub fn attach_account(&mut self, account_id: AccountId) -> Result<(), DomainError> {
        if !self.buyer.is_guest() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Order already belongs to an account",
            ));
        }
        if self.linked_account.is_some() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Order is already linked to an account",
            ));
        }
        self.linked_account = Some(account_id);
        Ok(())
    }

    fn transition_to(&mut self, target: OrderStatus) -> Result<(), DomainError> {
        self.status = self.status.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                .with_detail("order_id", self.id.to_string())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::plan_for;
    use crate::domain::order::GuestContact;

    fn account_buyer() -> Buyer {
        Buyer::account(AccountId::new("acct-1").unwrap())
    }

    fn guest_buyer() -> Buyer {
        Buyer::guest(GuestContact::new("Ada", "ada@example.com", "+54 11 5555-0001").unwrap())
    }

    fn new_order(buyer: Buyer) -> Order {
        Order::create(
            "example.com.ar",
            plan_for(BillingPeriod::OneYear),
            "mercadopago",
            buyer,
            Timestamp::now(),
        )
        .unwrap()
    }

    #[test]
    fn create_starts_pending_with_catalog_pricing() {
        let order = new_order(account_buyer());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.amount_cents, 590_000 * 12);
        assert_eq!(order.discount_cents, 0);
        assert_eq!(order.total_cents, order.amount_cents - order.discount_cents);
        assert_eq!(order.period_months(), 12);
        assert!(order.paid_at.is_none());
        assert!(order.payment_ref.is_none());
        assert!(order.plan_ref.is_some());
    }

    #[test]
    fn create_rejects_empty_domain() {
        let result = Order::create(
            "  ",
            plan_for(BillingPeriod::OneMonth),
            "mercadopago",
            account_buyer(),
            Timestamp::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn mark_paid_sets_payment_fields_once() {
        let mut order = new_order(account_buyer());
        let paid_at = Timestamp::now();
        order.mark_paid(paid_at, "pay-123").unwrap();

        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.paid_at, Some(paid_at));
        assert_eq!(order.payment_ref.as_deref(), Some("pay-123"));
    }

    #[test]
    fn mark_paid_twice_is_rejected() {
        let mut order = new_order(account_buyer());
        order.mark_paid(Timestamp::now(), "pay-123").unwrap();

        let result = order.mark_paid(Timestamp::now(), "pay-456");
        assert!(result.is_err());
        // First payment fields untouched
        assert_eq!(order.payment_ref.as_deref(), Some("pay-123"));
    }

    #[test]
    fn mark_failed_records_reason() {
        let mut order = new_order(account_buyer());
        order
            .mark_failed(FailureReason::AmountMismatch {
                expected_cents: 590_000,
                reported_cents: 100,
            })
            .unwrap();

        assert_eq!(order.status, OrderStatus::Failed);
        assert!(matches!(
            order.failure_reason,
            Some(FailureReason::AmountMismatch { .. })
        ));
    }

    #[test]
    fn mark_paid_after_failed_is_rejected() {
        let mut order = new_order(account_buyer());
        order
            .mark_failed(FailureReason::GatewayDeclined {
                detail: "rejected".to_string(),
            })
            .unwrap();

        assert!(order.mark_paid(Timestamp::now(), "pay-123").is_err());
        assert_eq!(order.status, OrderStatus::Failed);
    }

    #[test]
    fn owner_comes_from_account_buyer() {
        let order = new_order(account_buyer());
        assert_eq!(order.owner().map(|a| a.as_str()), Some("acct-1"));
        assert!(!order.is_ownerless());
    }

    #[test]
    fn guest_order_is_ownerless_until_linked() {
        let mut order = new_order(guest_buyer());
        assert!(order.is_ownerless());

        order.attach_account(AccountId::new("acct-2").unwrap()).unwrap();
        assert_eq!(order.owner().map(|a| a.as_str()), Some("acct-2"));
        // Creation-time buyer record is preserved
        assert!(order.buyer.is_guest());
    }

    #[test]
    fn attach_account_rejects_account_orders() {
        let mut order = new_order(account_buyer());
        let result = order.attach_account(AccountId::new("acct-2").unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn attach_account_rejects_double_link() {
        let mut order = new_order(guest_buyer());
        order.attach_account(AccountId::new("acct-2").unwrap()).unwrap();
        let result = order.attach_account(AccountId::new("acct-3").unwrap());
        assert!(result.is_err());
        assert_eq!(order.owner().map(|a| a.as_str()), Some("acct-2"));
    }
}
