//! Pricing errors

use rusty_money::MoneyError;
use thiserror::Error;

/// Errors that can occur while building or pricing line items.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Quantity was zero; line items must carry a positive quantity.
    #[error("line item quantity must be positive")]
    ZeroQuantity,

    /// Unit price was negative.
    #[error("line item unit price must not be negative")]
    NegativePrice,

    /// An amount overflowed the underlying representation.
    #[error("money amount overflowed")]
    AmountOverflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}
