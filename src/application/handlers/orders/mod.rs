//! Order query handlers.

mod get_order;
mod list_owned;
mod list_stale_pending;

pub use get_order::{GetOrderHandler, GetOrderQuery};
pub use list_owned::{ListOwnedOrdersHandler, ListOwnedOrdersQuery};
pub use list_stale_pending::{ListStalePendingOrdersHandler, ListStalePendingQuery};
