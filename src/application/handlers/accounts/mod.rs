//! Account handlers - linking guest orders at account creation.

mod link_guest_orders;

pub use link_guest_orders::{
    LinkGuestOrdersCommand, LinkGuestOrdersHandler, LinkGuestOrdersResult,
};
