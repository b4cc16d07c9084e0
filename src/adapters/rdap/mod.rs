//! RDAP availability adapter.

mod client;

pub use client::{RdapClient, RdapConfig};
