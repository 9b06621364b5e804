//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        customers::models::CustomerUuid,
        products::{
            errors::ProductsServiceError,
            models::{NewProduct, Product, ProductUpdate, ProductUuid},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        customer: CustomerUuid,
        product: NewProduct,
    ) -> Result<Product, ProductsServiceError> {
        if product.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        if update.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_customer_transaction(customer).await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves the live product catalogue (soft-deleted products are
    /// excluded).
    async fn list_products(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
    ) -> Result<Product, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(
        &self,
        customer: CustomerUuid,
        product: NewProduct,
    ) -> Result<Product, ProductsServiceError>;

    /// Replaces a product's name, price, stock and image.
    async fn update_product(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Soft-deletes a product.
    async fn delete_product(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::create_product};

    use super::*;

    fn new_product(uuid: ProductUuid, price: u64) -> NewProduct {
        NewProduct {
            uuid,
            name: "Thermometer".to_string(),
            price,
            stock: 10,
            image: None,
        }
    }

    #[tokio::test]
    async fn create_product_returns_created_record() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let product = ctx
            .products
            .create_product(ctx.customer_uuid, new_product(uuid, 999))
            .await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.price, 999);
        assert_eq!(product.stock, 10);
        assert!(product.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products
            .create_product(ctx.customer_uuid, new_product(uuid, 100))
            .await?;

        let result = ctx
            .products
            .create_product(ctx.customer_uuid, new_product(uuid, 100))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_blank_name_returns_missing_required_data() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(
                ctx.customer_uuid,
                NewProduct {
                    uuid: ProductUuid::new(),
                    name: String::new(),
                    price: 100,
                    stock: 1,
                    image: None,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        create_product(&ctx, uuid, 1_500).await?;

        let product = ctx.products.get_product(ctx.customer_uuid, uuid).await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.price, 1_500);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .get_product(ctx.customer_uuid, ProductUuid::new())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_returns_created_products() -> TestResult {
        let ctx = TestContext::new().await;

        let uuid_a = ProductUuid::new();
        let uuid_b = ProductUuid::new();

        create_product(&ctx, uuid_a, 100).await?;
        create_product(&ctx, uuid_b, 200).await?;

        let products = ctx.products.list_products(ctx.customer_uuid).await?;

        let uuids: Vec<ProductUuid> = products.iter().map(|p| p.uuid).collect();

        assert!(uuids.contains(&uuid_a), "product A should be in the list");
        assert!(uuids.contains(&uuid_b), "product B should be in the list");

        Ok(())
    }

    #[tokio::test]
    async fn update_product_reflects_new_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        create_product(&ctx, uuid, 500).await?;

        let updated = ctx
            .products
            .update_product(
                ctx.customer_uuid,
                uuid,
                ProductUpdate {
                    name: "Digital Thermometer".to_string(),
                    price: 750,
                    stock: 3,
                    image: Some("https://img.example.com/thermo.png".to_string()),
                },
            )
            .await?;

        assert_eq!(updated.price, 750);
        assert_eq!(updated.name, "Digital Thermometer");
        assert!(updated.is_low_stock(), "stock of 3 is below the threshold");

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        create_product(&ctx, uuid, 500).await?;

        ctx.products.delete_product(ctx.customer_uuid, uuid).await?;

        let result = ctx.products.get_product(ctx.customer_uuid, uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_twice_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        create_product(&ctx, uuid, 500).await?;

        ctx.products.delete_product(ctx.customer_uuid, uuid).await?;

        let result = ctx.products.delete_product(ctx.customer_uuid, uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound for second delete, got {result:?}"
        );

        Ok(())
    }
}
