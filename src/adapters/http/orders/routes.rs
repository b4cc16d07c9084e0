//! Router for order endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{get_order, list_orders, list_stale_orders};

/// Routes mounted under `/api/orders`.
///
/// - `GET /` - the caller's orders, identity required
/// - `GET /stale` - Pending orders older than a cutoff, identity required
/// - `GET /{id}` - single order, ownership enforced
pub fn routes() -> Router<AppState> {
    // "/stale" must be registered alongside "/:id"; axum matches the
    // literal segment first.
    Router::new()
        .route("/", get(list_orders))
        .route("/stale", get(list_stale_orders))
        .route("/:id", get(get_order))
}
