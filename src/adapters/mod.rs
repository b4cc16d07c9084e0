//! Adapters - concrete implementations of the ports.

pub mod http;
pub mod memory;
pub mod mercadopago;
pub mod postgres;
pub mod rdap;
