//! HTTP handlers for account endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::accounts::LinkGuestOrdersCommand;

use super::super::auth::AuthenticatedAccount;
use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{SyncAccountRequest, SyncAccountResponse};

/// POST /api/accounts/sync - account-creation hook.
///
/// Called once when an account is created. Claims paid guest orders whose
/// email matches and provisions their domains.
pub async fn sync_account(
    State(state): State<AppState>,
    account: AuthenticatedAccount,
    Json(request): Json<SyncAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.link_guest_orders_handler();
    let result = handler
        .handle(LinkGuestOrdersCommand {
            account_id: account.account_id,
            email: request.email,
        })
        .await?;

    Ok(Json(SyncAccountResponse::from(result)))
}
