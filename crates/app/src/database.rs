//! Database connection management

use sqlx::{PgPool, Postgres, Transaction, query};

use crate::domain::customers::models::CustomerUuid;

/// SQL used to set the customer context for row-level security.
pub const SET_CUSTOMER_CONTEXT_SQL: &str =
    "SELECT set_config('app.current_customer_uuid', $1, true)";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction scoped to one customer.
    ///
    /// The customer context drives the RLS policies on carts and orders, so
    /// every statement inside the transaction only sees that customer's
    /// rows. Store-global tables (products) are unaffected.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or setting the
    /// customer context fails.
    pub async fn begin_customer_transaction(
        &self,
        customer: CustomerUuid,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(SET_CUSTOMER_CONTEXT_SQL)
            .bind(customer.into_uuid().to_string())
            .execute(&mut *tx)
            .await?;

        Ok(tx)
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Run the embedded migrations against the given pool.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
