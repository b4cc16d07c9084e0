//! HTTP adapter - axum routers, handlers and DTOs.

use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::reconciliation::ReconcilePaymentResult;

pub mod accounts;
pub mod auth;
pub mod checkout;
pub mod domains;
pub mod error;
pub mod orders;
pub mod state;
pub mod webhooks;

pub use auth::{AuthenticatedAccount, MaybeAccount};
pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// All API routes, mounted under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/checkout", checkout::routes())
        .nest("/webhooks", webhooks::routes())
        .nest("/orders", orders::routes())
        .nest("/domains", domains::routes())
        .nest("/accounts", accounts::routes())
}

/// The complete application: API routes plus the middleware stack.
pub fn app(state: AppState, request_timeout: Duration, cors_origins: &[String]) -> Router {
    Router::new()
        .nest("/api", api_router())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// An empty origin list allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Stable label for a reconciliation outcome, used in API responses.
pub(crate) fn reconcile_status_label(result: &ReconcilePaymentResult) -> &'static str {
    match result {
        ReconcilePaymentResult::Provisioned { .. } => "provisioned",
        ReconcilePaymentResult::ProvisioningDeferred { .. } => "provisioning_deferred",
        ReconcilePaymentResult::PaidButUnprovisioned { .. } => "paid_but_unprovisioned",
        ReconcilePaymentResult::DuplicateActiveDomain { .. } => "duplicate_active_domain",
        ReconcilePaymentResult::AmountMismatch { .. } => "amount_mismatch",
        ReconcilePaymentResult::Failed { .. } => "failed",
        ReconcilePaymentResult::AlreadyHandled { .. } => "already_handled",
        ReconcilePaymentResult::Anomaly { .. } => "anomaly",
        ReconcilePaymentResult::Acknowledged { .. } => "acknowledged",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::memory::{InMemoryDomainRegistry, InMemoryOrderStore};
    use crate::adapters::mercadopago::{MercadoPagoConfig, MercadoPagoGateway};
    use crate::adapters::rdap::{RdapClient, RdapConfig};

    fn test_state() -> AppState {
        AppState {
            orders: Arc::new(InMemoryOrderStore::new()),
            registry: Arc::new(InMemoryDomainRegistry::new()),
            gateway: Arc::new(MercadoPagoGateway::new(MercadoPagoConfig::new("TEST-token"))),
            availability: Arc::new(RdapClient::new(RdapConfig::new("https://rdap.test"))),
            simulation_enabled: true,
        }
    }

    #[test]
    fn api_router_builds() {
        let router = api_router();
        let _: Router<()> = router.with_state(test_state());
    }

    #[test]
    fn app_builds_with_middleware_stack() {
        let _app = app(test_state(), Duration::from_secs(30), &[]);
    }

    #[test]
    fn app_builds_with_explicit_cors_origins() {
        let origins = vec!["https://tienda.example".to_string()];
        let _app = app(test_state(), Duration::from_secs(30), &origins);
    }
}
