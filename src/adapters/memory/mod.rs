//! In-memory adapters used by tests and local development profiles.

mod domain_registry;
mod order_store;

pub use domain_registry::InMemoryDomainRegistry;
pub use order_store::InMemoryOrderStore;
