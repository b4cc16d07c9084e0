//! Shared application state for the HTTP adapter.

use std::sync::Arc;

use crate::application::handlers::accounts::LinkGuestOrdersHandler;
use crate::application::handlers::checkout::{CreateOrderHandler, SimulatePaymentHandler};
use crate::application::handlers::domains::ListOwnedDomainsHandler;
use crate::application::handlers::orders::{
    GetOrderHandler, ListOwnedOrdersHandler, ListStalePendingOrdersHandler,
};
use crate::application::handlers::reconciliation::ReconcilePaymentHandler;
use crate::ports::{AvailabilityChecker, DomainRegistry, OrderStore, PaymentGateway};

/// Shared application state containing all port implementations.
///
/// Cloned per request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderStore>,
    pub registry: Arc<dyn DomainRegistry>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub availability: Arc<dyn AvailabilityChecker>,
    /// Whether the synchronous simulate-payment path is allowed.
    pub simulation_enabled: bool,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(
            self.orders.clone(),
            self.availability.clone(),
            self.gateway.clone(),
        )
    }

    pub fn simulate_payment_handler(&self) -> SimulatePaymentHandler {
        SimulatePaymentHandler::new(
            self.orders.clone(),
            self.registry.clone(),
            self.simulation_enabled,
        )
    }

    pub fn reconcile_payment_handler(&self) -> ReconcilePaymentHandler {
        ReconcilePaymentHandler::new(self.orders.clone(), self.registry.clone())
    }

    pub fn get_order_handler(&self) -> GetOrderHandler {
        GetOrderHandler::new(self.orders.clone())
    }

    pub fn list_stale_pending_handler(&self) -> ListStalePendingOrdersHandler {
        ListStalePendingOrdersHandler::new(self.orders.clone())
    }

    pub fn list_owned_orders_handler(&self) -> ListOwnedOrdersHandler {
        ListOwnedOrdersHandler::new(self.orders.clone())
    }

    pub fn link_guest_orders_handler(&self) -> LinkGuestOrdersHandler {
        LinkGuestOrdersHandler::new(self.orders.clone(), self.registry.clone())
    }

    pub fn list_owned_domains_handler(&self) -> ListOwnedDomainsHandler {
        ListOwnedDomainsHandler::new(self.registry.clone())
    }
}
