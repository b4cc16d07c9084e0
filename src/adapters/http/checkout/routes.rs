//! Router for checkout endpoints.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{create_order, simulate_payment};

/// Routes mounted under `/api/checkout`.
///
/// - `POST /orders` - create an order and a gateway redirect
/// - `POST /simulate-payment` - synchronous approval, development only
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/simulate-payment", post(simulate_payment))
}
