//! Checkout service.

use async_trait::async_trait;
use kiosk::{
    items::LineItem,
    quote::Quote,
    shipping::{ShippingSchedule, ShippingTier},
    tax::TaxRate,
};
use mockall::automock;
use rusty_money::{
    Money,
    iso::{self, Currency},
};

use crate::{
    database::Db,
    domain::{
        carts::repositories::{PgCartItemsRepository, PgCartsRepository},
        checkout::{errors::CheckoutServiceError, models::PricingConfig},
        customers::models::CustomerUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCheckoutService {
    db: Db,
    carts_repository: PgCartsRepository,
    cart_items_repository: PgCartItemsRepository,
    pricing: PricingConfig,
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(db: Db, pricing: PricingConfig) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            cart_items_repository: PgCartItemsRepository::new(),
            pricing,
        }
    }

    fn schedule(&self) -> Result<ShippingSchedule<'static>, CheckoutServiceError> {
        Ok(ShippingSchedule::new(
            minor_units(self.pricing.standard_shipping_fee)?,
            minor_units(self.pricing.express_shipping_fee)?,
        ))
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    async fn quote(
        &self,
        customer: CustomerUuid,
        tier: ShippingTier,
    ) -> Result<Quote<'static>, CheckoutServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let cart = self.carts_repository.ensure_cart(&mut tx, customer).await?;

        let lines = self
            .cart_items_repository
            .get_cart_items(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        let items = lines
            .iter()
            .map(|line| {
                LineItem::new(minor_units(line.unit_price)?, line.quantity)
                    .map_err(CheckoutServiceError::from)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let quote = Quote::calculate(
            &items,
            tier,
            &self.schedule()?,
            TaxRate::from_percent(self.pricing.tax_percent),
        )?;

        Ok(quote)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Price the customer's current cart under the given shipping tier.
    ///
    /// Pure read: the cart is not modified, and repeated calls return the
    /// same figures for the same cart.
    async fn quote(
        &self,
        customer: CustomerUuid,
        tier: ShippingTier,
    ) -> Result<Quote<'static>, CheckoutServiceError>;
}

fn minor_units(amount: u64) -> Result<Money<'static, Currency>, CheckoutServiceError> {
    let minor = i64::try_from(amount).map_err(|_overflow| CheckoutServiceError::AmountTooLarge)?;

    Ok(Money::from_minor(minor, iso::USD))
}
