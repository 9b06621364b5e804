//! Shipping tier query parsing helpers.

use kiosk::shipping::ShippingTier;
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

pub(crate) trait ShippingTierExt {
    fn into_shipping_tier(self) -> Result<ShippingTier, StatusError>;
}

impl ShippingTierExt for QueryParam<String, false> {
    fn into_shipping_tier(self) -> Result<ShippingTier, StatusError> {
        self.into_inner()
            .map(|value| value.parse::<ShippingTier>())
            .transpose()
            .or_400("could not parse \"shipping\" query parameter")
            .map(|tier| tier.unwrap_or(ShippingTier::Standard))
    }
}
