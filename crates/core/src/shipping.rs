//! Shipping tiers and fees

use std::str::FromStr;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shipping options offered at checkout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingTier {
    /// Regular delivery at the lower flat fee.
    Standard,

    /// Expedited delivery at the higher flat fee.
    Express,
}

impl ShippingTier {
    /// Wire representation of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
        }
    }
}

/// Raised when parsing an unrecognised shipping tier name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown shipping tier: {0}")]
pub struct UnknownShippingTier(pub String);

impl FromStr for ShippingTier {
    type Err = UnknownShippingTier;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            other => Err(UnknownShippingTier(other.to_string())),
        }
    }
}

/// Flat delivery fees per shipping tier.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShippingSchedule<'a> {
    standard: Money<'a, Currency>,
    express: Money<'a, Currency>,
}

impl<'a> ShippingSchedule<'a> {
    /// Creates a schedule from the two tier fees.
    ///
    /// Both fees must be in the same currency; the schedule's currency is
    /// whatever the fees carry.
    pub fn new(standard: Money<'a, Currency>, express: Money<'a, Currency>) -> Self {
        Self { standard, express }
    }

    /// Returns the flat fee for the given tier.
    pub fn fee(&self, tier: ShippingTier) -> Money<'a, Currency> {
        match tier {
            ShippingTier::Standard => self.standard,
            ShippingTier::Express => self.express,
        }
    }

    /// The currency the schedule's fees are denominated in.
    pub fn currency(&self) -> &'a Currency {
        self.standard.currency()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    fn schedule() -> ShippingSchedule<'static> {
        ShippingSchedule::new(Money::from_minor(5_000, USD), Money::from_minor(10_000, USD))
    }

    #[test]
    fn fee_selects_tier() {
        assert_eq!(
            schedule().fee(ShippingTier::Standard),
            Money::from_minor(5_000, USD)
        );
        assert_eq!(
            schedule().fee(ShippingTier::Express),
            Money::from_minor(10_000, USD)
        );
    }

    #[test]
    fn tier_parses_from_wire_names() {
        assert_eq!("standard".parse(), Ok(ShippingTier::Standard));
        assert_eq!("express".parse(), Ok(ShippingTier::Express));
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let result = "overnight".parse::<ShippingTier>();

        assert_eq!(result, Err(UnknownShippingTier("overnight".to_string())));
    }

    #[test]
    fn tier_round_trips_through_as_str() {
        for tier in [ShippingTier::Standard, ShippingTier::Express] {
            assert_eq!(tier.as_str().parse(), Ok(tier));
        }
    }
}
