//! Product Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Stock level below which a product counts as low-stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    /// Unit price in minor units.
    pub price: u64,
    /// Units on hand. Placement never decrements this; it is bookkeeping,
    /// not a reservation.
    pub stock: u32,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Product {
    /// `true` when stock on hand has fallen below the reorder threshold.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub stock: u32,
    pub image: Option<String>,
}

/// Product Update Model
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: u64,
    pub stock: u32,
    pub image: Option<String>,
}
