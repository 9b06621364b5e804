//! Test Helpers

use crate::{
    domain::products::{
        ProductsService, ProductsServiceError,
        models::{NewProduct, Product, ProductUuid},
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    product: ProductUuid,
    price: u64,
) -> Result<Product, ProductsServiceError> {
    ctx.products
        .create_product(
            ctx.customer_uuid,
            NewProduct {
                uuid: product,
                name: format!("Product {product}"),
                price,
                stock: 25,
                image: None,
            },
        )
        .await
}
