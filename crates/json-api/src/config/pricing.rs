//! Pricing Config

use clap::Args;
use kiosk_app::domain::checkout::PricingConfig;

/// Checkout pricing settings.
///
/// Fees are minor units of the store currency.
#[derive(Debug, Args)]
pub struct PricingSettings {
    /// Flat fee for standard shipping, in minor units
    #[arg(long, env = "STANDARD_SHIPPING_FEE", default_value_t = 50_00)]
    pub standard_shipping_fee: u64,

    /// Flat fee for express shipping, in minor units
    #[arg(long, env = "EXPRESS_SHIPPING_FEE", default_value_t = 100_00)]
    pub express_shipping_fee: u64,

    /// Tax rate in percent points applied to subtotal plus shipping
    #[arg(long, env = "TAX_RATE_PERCENT", default_value_t = 7.0)]
    pub tax_percent: f64,
}

impl From<&PricingSettings> for PricingConfig {
    fn from(settings: &PricingSettings) -> Self {
        Self {
            standard_shipping_fee: settings.standard_shipping_fee,
            express_shipping_fee: settings.express_shipping_fee,
            tax_percent: settings.tax_percent,
        }
    }
}
