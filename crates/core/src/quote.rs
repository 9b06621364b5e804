//! Quote

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};

use crate::{
    errors::PricingError,
    items::{LineItem, subtotal},
    shipping::{ShippingSchedule, ShippingTier},
    tax::TaxRate,
};

/// A fully priced checkout breakdown.
///
/// All four figures are exact decimal amounts; [`Quote::rounded`] produces
/// the two-decimal presentation values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quote<'a> {
    subtotal: Money<'a, Currency>,
    shipping: Money<'a, Currency>,
    tax: Money<'a, Currency>,
    total: Money<'a, Currency>,
}

impl<'a> Quote<'a> {
    /// Prices a list of line items under the given shipping tier and tax
    /// rate.
    ///
    /// An empty item list is a valid input: the subtotal is zero and tax is
    /// computed on the shipping fee alone.
    ///
    /// # Errors
    ///
    /// - [`PricingError::AmountOverflow`]: an amount overflowed during
    ///   summation or tax multiplication.
    /// - [`PricingError::Money`]: an item's currency did not match the
    ///   shipping schedule's currency.
    pub fn calculate(
        items: &[LineItem<'a>],
        tier: ShippingTier,
        schedule: &ShippingSchedule<'a>,
        tax_rate: TaxRate,
    ) -> Result<Self, PricingError> {
        let subtotal = subtotal(items, schedule.currency())?;
        let shipping = schedule.fee(tier);

        let taxable = subtotal.add(shipping)?;
        let tax = tax_rate.tax_on(&taxable)?;
        let total = taxable.add(tax)?;

        Ok(Self {
            subtotal,
            shipping,
            tax,
            total,
        })
    }

    /// Sum of all extended line prices.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Flat fee for the selected shipping tier.
    pub fn shipping(&self) -> Money<'a, Currency> {
        self.shipping
    }

    /// Tax on subtotal plus shipping.
    pub fn tax(&self) -> Money<'a, Currency> {
        self.tax
    }

    /// Subtotal plus shipping plus tax.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Two-decimal presentation copy of this quote.
    ///
    /// Rounds half away from zero, the conventional display rounding for
    /// retail amounts. This is the only place rounding happens.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_display(&self.subtotal),
            shipping: round_display(&self.shipping),
            tax: round_display(&self.tax),
            total: round_display(&self.total),
        }
    }
}

fn round_display<'a>(amount: &Money<'a, Currency>) -> Money<'a, Currency> {
    let rounded = amount
        .amount()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Money::from_decimal(rounded, amount.currency())
}

/// Formats an exact amount as a plain decimal string (no thousands
/// separators, no symbol), e.g. `358.985`.
///
/// Trailing zeros introduced by intermediate decimal scales are stripped.
#[must_use]
pub fn plain_amount(amount: &Money<'_, Currency>) -> String {
    amount.amount().normalize().to_string()
}
