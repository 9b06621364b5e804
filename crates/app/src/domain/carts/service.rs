//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartItem, NewCartItem},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        customers::models::CustomerUuid,
        products::models::ProductUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, customer: CustomerUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let mut cart = self.carts_repository.ensure_cart(&mut tx, customer).await?;

        let items = self
            .items_repository
            .get_cart_items(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        cart.items.extend(items);

        Ok(cart)
    }

    async fn add_item(
        &self,
        customer: CustomerUuid,
        item: NewCartItem,
    ) -> Result<CartItem, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let cart = self.carts_repository.ensure_cart(&mut tx, customer).await?;

        let inserted = self
            .items_repository
            .upsert_cart_item(&mut tx, cart.uuid, &item)
            .await?;

        let Some(product) = inserted else {
            return Err(CartsServiceError::InvalidReference);
        };

        let item = self
            .items_repository
            .get_cart_item(&mut tx, cart.uuid, product)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn set_item_quantity(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<CartItem, CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let cart = self.carts_repository.ensure_cart(&mut tx, customer).await?;

        let rows_affected = self
            .items_repository
            .set_cart_item_quantity(&mut tx, cart.uuid, product, quantity)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        let item = self
            .items_repository
            .get_cart_item(&mut tx, cart.uuid, product)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn remove_item(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let cart = self.carts_repository.ensure_cart(&mut tx, customer).await?;

        let rows_affected = self
            .items_repository
            .remove_cart_item(&mut tx, cart.uuid, product)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn clear_cart(&self, customer: CustomerUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let cart = self.carts_repository.ensure_cart(&mut tx, customer).await?;

        self.items_repository.clear_cart(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The customer's cart with items, created empty on first use.
    async fn get_cart(&self, customer: CustomerUuid) -> Result<Cart, CartsServiceError>;

    /// Add a product to the cart; adding an already-present product
    /// accumulates quantity.
    async fn add_item(
        &self,
        customer: CustomerUuid,
        item: NewCartItem,
    ) -> Result<CartItem, CartsServiceError>;

    /// Overwrite the quantity of an item already in the cart.
    async fn set_item_quantity(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<CartItem, CartsServiceError>;

    /// Remove a single product from the cart.
    async fn remove_item(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError>;

    /// Remove every item from the cart.
    async fn clear_cart(&self, customer: CustomerUuid) -> Result<(), CartsServiceError>;
}
