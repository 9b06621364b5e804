//! Products
//!
//! The product catalogue doubles as the store's inventory: each product
//! carries its live price and stock on hand.

pub mod errors;
pub mod models;
pub(crate) mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use service::*;
