//! Kiosk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    errors::PricingError,
    items::{LineItem, subtotal},
    quote::Quote,
    shipping::{ShippingSchedule, ShippingTier, UnknownShippingTier},
    tax::TaxRate,
};
