//! Line items

use rusty_money::{Money, iso::Currency};

use crate::errors::PricingError;

/// A single priced line: one product at a unit price, taken `quantity` times.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineItem<'a> {
    unit_price: Money<'a, Currency>,
    quantity: u32,
}

impl<'a> LineItem<'a> {
    /// Creates a new line item.
    ///
    /// # Errors
    ///
    /// - [`PricingError::ZeroQuantity`]: `quantity` was zero.
    /// - [`PricingError::NegativePrice`]: `unit_price` was negative.
    pub fn new(unit_price: Money<'a, Currency>, quantity: u32) -> Result<Self, PricingError> {
        if quantity == 0 {
            return Err(PricingError::ZeroQuantity);
        }

        if unit_price.is_negative() {
            return Err(PricingError::NegativePrice);
        }

        Ok(Self {
            unit_price,
            quantity,
        })
    }

    /// Returns the unit price of the line item.
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Returns the quantity of the line item.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::AmountOverflow`] if the multiplication does
    /// not fit in minor units.
    pub fn extended_price(&self) -> Result<Money<'a, Currency>, PricingError> {
        let minor = self
            .unit_price
            .to_minor_units()
            .checked_mul(i64::from(self.quantity))
            .ok_or(PricingError::AmountOverflow)?;

        Ok(Money::from_minor(minor, self.unit_price.currency()))
    }
}

/// Sums the extended prices of a list of line items.
///
/// The currency is supplied by the caller so that an empty list folds to a
/// zero amount rather than an error; summation order does not affect the
/// result.
///
/// # Errors
///
/// - [`PricingError::AmountOverflow`]: an extended price or the running sum
///   overflowed.
/// - [`PricingError::Money`]: an item carried a different currency than
///   `currency`.
pub fn subtotal<'a>(
    items: &[LineItem<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    items
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            acc.add(item.extended_price()?).map_err(PricingError::from)
        })
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn extended_price_multiplies_by_quantity() -> TestResult {
        let item = LineItem::new(Money::from_minor(12_000, USD), 2)?;

        assert_eq!(item.extended_price()?, Money::from_minor(24_000, USD));

        Ok(())
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let result = LineItem::new(Money::from_minor(100, USD), 0);

        assert_eq!(result, Err(PricingError::ZeroQuantity));
    }

    #[test]
    fn negative_price_is_rejected() {
        let result = LineItem::new(Money::from_minor(-100, USD), 1);

        assert_eq!(result, Err(PricingError::NegativePrice));
    }

    #[test]
    fn zero_price_is_allowed() -> TestResult {
        let item = LineItem::new(Money::from_minor(0, USD), 3)?;

        assert_eq!(item.extended_price()?, Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn subtotal_sums_extended_prices() -> TestResult {
        let items = [
            LineItem::new(Money::from_minor(12_000, USD), 2)?,
            LineItem::new(Money::from_minor(4_550, USD), 1)?,
        ];

        assert_eq!(subtotal(&items, USD)?, Money::from_minor(28_550, USD));

        Ok(())
    }

    #[test]
    fn subtotal_is_order_independent() -> TestResult {
        let a = LineItem::new(Money::from_minor(199, USD), 3)?;
        let b = LineItem::new(Money::from_minor(950, USD), 1)?;
        let c = LineItem::new(Money::from_minor(25, USD), 7)?;

        let forward = subtotal(&[a, b, c], USD)?;
        let backward = subtotal(&[c, b, a], USD)?;

        assert_eq!(forward, backward, "summation must commute");

        Ok(())
    }

    #[test]
    fn subtotal_of_empty_items_is_zero() -> TestResult {
        assert_eq!(subtotal(&[], USD)?, Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn subtotal_rejects_mixed_currencies() -> TestResult {
        let items = [
            LineItem::new(Money::from_minor(100, USD), 1)?,
            LineItem::new(Money::from_minor(100, GBP), 1)?,
        ];

        assert!(matches!(
            subtotal(&items, USD),
            Err(PricingError::Money(_))
        ));

        Ok(())
    }

    #[test]
    fn extended_price_overflow_is_reported() -> TestResult {
        let item = LineItem::new(Money::from_minor(i64::MAX, USD), 2)?;

        assert_eq!(item.extended_price(), Err(PricingError::AmountOverflow));

        Ok(())
    }
}
