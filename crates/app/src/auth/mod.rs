//! Authentication
//!
//! Opaque bearer API tokens: the raw token embeds a lookup uuid and a
//! random secret; storage keeps only a SHA-256 verifier digest bound to
//! the owning customer.

mod digest;
mod errors;
mod models;
mod repository;
mod service;
mod token;

pub use digest::verifier_digest;
pub use errors::*;
pub use models::*;
pub use repository::PgAuthRepository;
pub use service::*;
pub use token::*;
