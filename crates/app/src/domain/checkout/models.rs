//! Checkout Models

/// Store-wide pricing knobs, injected at service construction.
///
/// Fees are minor units of the store currency (USD).
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    pub standard_shipping_fee: u64,
    pub express_shipping_fee: u64,
    /// Tax in percent points (`7.0` means 7%).
    pub tax_percent: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            standard_shipping_fee: 50_00,
            express_shipping_fee: 100_00,
            tax_percent: 7.0,
        }
    }
}
