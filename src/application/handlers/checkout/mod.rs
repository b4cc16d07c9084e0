//! Checkout handlers - order creation and the development payment path.

mod create_order;
mod simulate_payment;

pub use create_order::{CreateOrderCommand, CreateOrderHandler, CreateOrderResult};
pub use simulate_payment::{
    SimulatePaymentCommand, SimulatePaymentHandler, SimulatePaymentResult,
};
