//! Caller identity extraction.
//!
//! In production the account id is injected by the identity-aware proxy in
//! front of this service. For development and testing it is taken from the
//! `X-Account-Id` header directly.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::foundation::AccountId;

use super::error::ErrorResponse;

const ACCOUNT_HEADER: &str = "X-Account-Id";

/// A verified account identity. Extraction fails with 401 when absent.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account_id: AccountId,
}

/// Rejection type for AuthenticatedAccount extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new("UNAUTHORIZED", "Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedAccount
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let account_id = account_from_parts(parts).ok_or(AuthenticationRequired)?;
            Ok(AuthenticatedAccount { account_id })
        })
    }
}

/// An optional account identity. Never rejects; endpoints that allow guest
/// access use this and branch on the inner option.
#[derive(Debug, Clone)]
pub struct MaybeAccount(pub Option<AccountId>);

impl<S> axum::extract::FromRequestParts<S> for MaybeAccount
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { Ok(MaybeAccount(account_from_parts(parts))) })
    }
}

fn account_from_parts(parts: &axum::http::request::Parts) -> Option<AccountId> {
    parts
        .headers
        .get(ACCOUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| AccountId::new(s).ok())
}
