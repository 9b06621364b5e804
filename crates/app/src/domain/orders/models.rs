//! Order Models

use jiff::Timestamp;

use crate::{
    domain::{customers::models::CustomerUuid, orders::status::OrderStatus},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Model
///
/// Line items are snapshots: name and unit price are copied from the
/// product at placement time and never re-derived, so later catalogue
/// edits leave historical orders untouched.
#[derive(Debug, Clone)]
pub struct Order {
    pub uuid: OrderUuid,
    pub customer_uuid: CustomerUuid,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItem>;

/// OrderItem Model
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub uuid: OrderItemUuid,
    /// Product name at placement time.
    pub name: String,
    pub quantity: u32,
    /// Unit price in minor units at placement time.
    pub unit_price: u64,
    pub created_at: Timestamp,
}
