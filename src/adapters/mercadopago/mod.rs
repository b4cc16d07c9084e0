//! Mercado Pago adapter - gateway client and webhook payload types.

mod gateway;
mod notification;

pub use gateway::{MercadoPagoConfig, MercadoPagoGateway};
pub use notification::WebhookNotification;
