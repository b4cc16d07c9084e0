//! Router for domain endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{check_domain, list_domains};

/// Routes mounted under `/api/domains`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_domains))
        .route("/check", get(check_domain))
}
