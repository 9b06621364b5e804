//! Orders service.

use std::collections::HashMap;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        carts::repositories::{PgCartItemsRepository, PgCartsRepository},
        customers::models::CustomerUuid,
        orders::{
            errors::OrdersServiceError,
            models::{Order, OrderItem, OrderUuid},
            repository::PgOrdersRepository,
            status::OrderStatus,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    carts_repository: PgCartsRepository,
    cart_items_repository: PgCartItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            carts_repository: PgCartsRepository::new(),
            cart_items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn place_order(&self, customer: CustomerUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let cart = self.carts_repository.ensure_cart(&mut tx, customer).await?;

        let lines = self
            .cart_items_repository
            .get_cart_items(&mut tx, cart.uuid)
            .await?;

        // The line read joins live products; a raw count mismatch means a
        // cart line references a product that no longer resolves.
        let raw_count = self
            .repository
            .count_cart_items(&mut tx, cart.uuid)
            .await?;

        if raw_count != lines.len() as i64 {
            return Err(OrdersServiceError::InvalidReference);
        }

        if lines.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let mut order = self
            .repository
            .create_order(&mut tx, OrderUuid::new(), customer)
            .await?;

        for (position, line) in lines.iter().enumerate() {
            let position =
                i32::try_from(position).map_err(|_overflow| OrdersServiceError::InvalidData)?;

            let item = self
                .repository
                .create_order_item(&mut tx, order.uuid, position, line)
                .await?;

            order.items.push(item);
        }

        self.cart_items_repository
            .clear_cart(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        info!(order = %order.uuid, lines = order.items.len(), "order placed");

        Ok(order)
    }

    async fn list_orders(&self, customer: CustomerUuid) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let mut orders = self.repository.list_orders(&mut tx).await?;

        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

        let items = self.repository.get_order_items(&mut tx, &uuids).await?;

        tx.commit().await?;

        let mut by_order: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();

        for (order_uuid, item) in items {
            by_order.entry(order_uuid.into_uuid()).or_default().push(item);
        }

        for order in &mut orders {
            if let Some(items) = by_order.remove(&order.uuid.into_uuid()) {
                order.items = items;
            }
        }

        Ok(orders)
    }

    async fn get_order(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let mut order = self.repository.get_order(&mut tx, order).await?;

        let items = self
            .repository
            .get_order_items(&mut tx, &[order.uuid])
            .await?;

        tx.commit().await?;

        order.items = items.into_iter().map(|(_, item)| item).collect();

        Ok(order)
    }

    async fn update_status(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let current = self.repository.get_order(&mut tx, order).await?;

        if !current.status.can_transition_to(status) {
            return Err(OrdersServiceError::InvalidTransition {
                from: current.status,
                to: status,
            });
        }

        let mut updated = self
            .repository
            .update_order_status(&mut tx, order, status)
            .await?;

        let items = self
            .repository
            .get_order_items(&mut tx, &[updated.uuid])
            .await?;

        tx.commit().await?;

        updated.items = items.into_iter().map(|(_, item)| item).collect();

        info!(
            order = %updated.uuid,
            from = current.status.as_str(),
            to = status.as_str(),
            "order status updated"
        );

        Ok(updated)
    }

    async fn cancel_order(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        self.update_status(customer, order, OrderStatus::Cancelled)
            .await
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Place an order from the customer's current cart.
    ///
    /// Snapshots every cart line ({name, quantity, unit price} at this
    /// moment), creates the order as pending, and clears the cart — all in
    /// one transaction. Fails when the cart is empty or a cart line's
    /// product no longer resolves.
    async fn place_order(&self, customer: CustomerUuid) -> Result<Order, OrdersServiceError>;

    /// The customer's orders, newest first.
    async fn list_orders(&self, customer: CustomerUuid) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError>;

    /// Move an order to a new status, enforcing the lifecycle table.
    async fn update_status(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;

    /// Soft-cancel: transition the order to cancelled if its current
    /// status allows it.
    async fn cancel_order(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError>;
}
