//! Buyer identity attached to an order.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, ValidationError};

/// Contact details captured for a guest checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub tax_id: Option<String>,
}

impl GuestContact {
    /// Creates a guest contact, validating the required fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        let phone = phone.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        if phone.trim().is_empty() {
            return Err(ValidationError::empty_field("phone"));
        }

        Ok(Self {
            name,
            email,
            phone,
            company: None,
            tax_id: None,
        })
    }

    /// Attaches an optional company name.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Attaches an optional tax id.
    pub fn with_tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = Some(tax_id.into());
        self
    }

    /// Case-insensitive email comparison for guest-order linking.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}

/// Who placed the order.
///
/// Guest orders carry contact details instead of an account; they can be
/// attached to an account later when the buyer registers with a matching
/// email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Buyer {
    /// Order placed by a verified account.
    Account { account_id: AccountId },
    /// Order placed without an account.
    Guest { contact: GuestContact },
}

impl Buyer {
    /// Creates an account buyer.
    pub fn account(account_id: AccountId) -> Self {
        Buyer::Account { account_id }
    }

    /// Creates a guest buyer.
    pub fn guest(contact: GuestContact) -> Self {
        Buyer::Guest { contact }
    }

    /// Returns the owning account, if any.
    pub fn account_id(&self) -> Option<&AccountId> {
        match self {
            Buyer::Account { account_id } => Some(account_id),
            Buyer::Guest { .. } => None,
        }
    }

    /// Returns the guest contact, if this is a guest order.
    pub fn guest_contact(&self) -> Option<&GuestContact> {
        match self {
            Buyer::Account { .. } => None,
            Buyer::Guest { contact } => Some(contact),
        }
    }

    /// Returns true if the order has no owning account.
    pub fn is_guest(&self) -> bool {
        matches!(self, Buyer::Guest { .. })
    }
}
