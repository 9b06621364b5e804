//! Customers service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::customers::{
    errors::CustomersServiceError,
    models::{Customer, CustomerUuid, NewCustomer},
    repository::PgCustomersRepository,
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgCustomersRepository::new(pool),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<Customer, CustomersServiceError> {
        if customer.name.trim().is_empty() || customer.email.trim().is_empty() {
            return Err(CustomersServiceError::MissingRequiredData);
        }

        self.repository
            .create_customer(&customer)
            .await
            .map_err(CustomersServiceError::from)
    }

    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<Customer, CustomersServiceError> {
        self.repository
            .get_customer(customer)
            .await
            .map_err(CustomersServiceError::from)
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Creates a new customer account.
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<Customer, CustomersServiceError>;

    /// Retrieve a single customer.
    async fn get_customer(&self, customer: CustomerUuid)
    -> Result<Customer, CustomersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::customers::models::Role, test::TestContext};

    use super::*;

    #[tokio::test]
    async fn create_customer_returns_created_record() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = CustomerUuid::new();

        let customer = ctx
            .customers
            .create_customer(NewCustomer {
                uuid,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role: Role::Customer,
            })
            .await?;

        assert_eq!(customer.uuid, uuid);
        assert_eq!(customer.role, Role::Customer);

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        let new = |uuid| NewCustomer {
            uuid,
            name: "Ada".to_string(),
            email: "dup@example.com".to_string(),
            role: Role::Customer,
        };

        ctx.customers.create_customer(new(CustomerUuid::new())).await?;

        let result = ctx.customers.create_customer(new(CustomerUuid::new())).await;

        assert!(
            matches!(result, Err(CustomersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn blank_name_returns_missing_required_data() {
        let ctx = TestContext::new().await;

        let result = ctx
            .customers
            .create_customer(NewCustomer {
                uuid: CustomerUuid::new(),
                name: "  ".to_string(),
                email: "blank@example.com".to_string(),
                role: Role::Customer,
            })
            .await;

        assert!(
            matches!(result, Err(CustomersServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_customer_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.customers.get_customer(CustomerUuid::new()).await;

        assert!(
            matches!(result, Err(CustomersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
