//! Router for account endpoints.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::sync_account;

/// Routes mounted under `/api/accounts`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/sync", post(sync_account))
}
