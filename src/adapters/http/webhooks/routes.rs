//! Router for webhook endpoints.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::mercadopago_webhook;

/// Routes mounted under `/api/webhooks`. No caller authentication; the
/// payment is verified against the gateway itself.
pub fn routes() -> Router<AppState> {
    Router::new().route("/mercadopago", post(mercadopago_webhook))
}
