//! PostgreSQL adapters for the persistence ports.

mod domain_registry;
mod order_store;

pub use domain_registry::PostgresDomainRegistry;
pub use order_store::PostgresOrderStore;
