//! Checkout
//!
//! Bridges the customer's cart to the pricing engine in `kiosk`.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::CheckoutServiceError;
pub use models::PricingConfig;
pub use service::*;
