//! HTTP handlers for domain endpoints.

use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;

use crate::application::handlers::domains::ListOwnedDomainsQuery;
use crate::domain::foundation::DomainError;
use crate::ports::Availability;

use super::super::auth::AuthenticatedAccount;
use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{
    CheckDomainParams, CheckDomainResponse, DomainRecordResponse, OwnedDomainsResponse,
};

const DEFAULT_SUFFIX: &str = "com.ar";

/// GET /api/domains/check?name=..&suffix=.. - registration availability.
///
/// A checker failure surfaces as an error status; availability is never
/// fabricated.
pub async fn check_domain(
    State(state): State<AppState>,
    Query(params): Query<CheckDomainParams>,
) -> Result<impl IntoResponse, ApiError> {
    let name = params.name.trim().to_lowercase();
    validate_label(&name)?;

    let suffix = params
        .suffix
        .unwrap_or_else(|| DEFAULT_SUFFIX.to_string());

    let availability = state.availability.check(&name, &suffix).await?;

    Ok(Json(CheckDomainResponse {
        domain: format!("{}.{}", name, suffix),
        available: availability == Availability::Available,
    }))
}

/// GET /api/domains - registrations owned by the authenticated account.
pub async fn list_domains(
    State(state): State<AppState>,
    AuthenticatedAccount { account_id }: AuthenticatedAccount,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_owned_domains_handler();
    let records = handler.handle(ListOwnedDomainsQuery { account_id }).await?;

    let domains: Vec<DomainRecordResponse> =
        records.into_iter().map(DomainRecordResponse::from).collect();
    Ok(Json(OwnedDomainsResponse {
        count: domains.len(),
        domains,
    }))
}

/// Validates a domain label: 1-63 chars, alphanumeric and hyphen, no
/// leading or trailing hyphen.
fn validate_label(label: &str) -> Result<(), DomainError> {
    if label.is_empty() || label.len() > 63 {
        return Err(DomainError::validation(
            "name",
            "Domain label must be 1 to 63 characters",
        ));
    }
    if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(DomainError::validation(
            "name",
            "Domain label may only contain letters, digits and hyphens",
        ));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(DomainError::validation(
            "name",
            "Domain label may not start or end with a hyphen",
        ));
    }
    Ok(())
}
