//! Tax rate

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::errors::PricingError;

/// A flat tax rate applied to the taxable amount (subtotal plus shipping).
///
/// The rate is held as a fraction (`0.07` for 7%) and applied in exact
/// decimal space — the product is never rounded here, so repeated
/// computation cannot compound rounding error. Rounding belongs to
/// presentation only.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TaxRate(Percentage);

impl TaxRate {
    /// Creates a tax rate from a fraction (`0.07` for 7%).
    #[must_use]
    pub fn new(rate: Percentage) -> Self {
        Self(rate)
    }

    /// Creates a tax rate from percent points (`7.0` for 7%).
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Self(Percentage::from(percent / 100.0))
    }

    /// Returns the rate as a fraction.
    pub fn rate(&self) -> Percentage {
        self.0
    }

    /// Tax owed on `amount`, exact to the underlying decimal.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::AmountOverflow`] if the multiplication cannot
    /// be represented.
    pub fn tax_on<'a>(
        &self,
        amount: &Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, PricingError> {
        let rate = self.0 * Decimal::ONE;

        let tax = rate
            .checked_mul(*amount.amount())
            .ok_or(PricingError::AmountOverflow)?;

        Ok(Money::from_decimal(tax, amount.currency()))
    }
}
