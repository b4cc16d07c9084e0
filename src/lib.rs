//! Domain Store - Country-code domain registration storefront
//!
//! This crate implements the order lifecycle and payment reconciliation
//! workflow behind the storefront: orders are created before payment,
//! payment outcomes arrive asynchronously, and approved payments provision
//! domain registrations exactly once.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
