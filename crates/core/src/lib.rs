//! Kiosk
//!
//! Kiosk is the checkout pricing engine for the storefront: pure functions
//! from line items, a shipping tier and a tax rate to a priced quote.

pub mod errors;
pub mod items;
pub mod prelude;
pub mod quote;
pub mod shipping;
pub mod tax;
