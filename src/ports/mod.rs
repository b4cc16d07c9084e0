//! Ports layer - contracts between the application core and adapters.

mod availability_checker;
mod domain_registry;
mod order_store;
mod payment_gateway;

pub use availability_checker::{Availability, AvailabilityChecker};
pub use domain_registry::DomainRegistry;
pub use order_store::{OrderStore, Transition};
pub use payment_gateway::{GatewayError, GatewayErrorCode, GatewayPayment, PaymentGateway};
