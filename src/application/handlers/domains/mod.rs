//! Domain registration query handlers.

mod list_owned;

pub use list_owned::{ListOwnedDomainsHandler, ListOwnedDomainsQuery};
