//! Order module - purchase lifecycle for domain registrations.

mod aggregate;
mod buyer;
mod number;
mod status;

pub use aggregate::{FailureReason, Order};
pub use buyer::{Buyer, GuestContact};
pub use number::OrderNumber;
pub use status::OrderStatus;
