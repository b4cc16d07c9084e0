//! Registry module - domain registration records.

mod record;
mod status;

pub use record::{registration_years, split_domain, DomainRecord};
pub use status::DomainStatus;
