//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*, orders::errors::into_status_error, orders::handlers::get::OrderResponse,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The caller's orders, newest first
    pub orders: Vec<OrderResponse>,
}

/// Order Index Handler
///
/// Returns the caller's orders, newest first.
#[endpoint(tags("orders"), summary = "List Orders", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_or_401()?;

    let orders = state
        .app
        .orders
        .list_orders(customer.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use kiosk_app::domain::orders::{MockOrdersService, OrderStatus};

    use crate::test_helpers::{TEST_CUSTOMER_UUID, make_order, orders_service};

    use super::*;

    fn make_service(repo: MockOrdersService) -> Service {
        orders_service(repo, Router::with_path("orders").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_list_orders()
            .once()
            .withf(|customer| *customer == TEST_CUSTOMER_UUID)
            .return_once(|_| Ok(vec![]));

        repo.expect_place_order().never();
        repo.expect_get_order().never();
        repo.expect_update_status().never();
        repo.expect_cancel_order().never();

        let body: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert!(body.orders.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_orders() -> TestResult {
        let newest = make_order(OrderStatus::Pending);
        let older = make_order(OrderStatus::Delivered);

        let newest_uuid = newest.uuid.into_uuid();

        let mut repo = MockOrdersService::new();

        repo.expect_list_orders()
            .once()
            .return_once(move |_| Ok(vec![newest, older]));

        repo.expect_place_order().never();
        repo.expect_get_order().never();
        repo.expect_update_status().never();
        repo.expect_cancel_order().never();

        let body: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(body.orders.len(), 2);
        assert_eq!(body.orders[0].uuid, newest_uuid);
        assert_eq!(body.orders[1].status, OrderStatus::Delivered.as_str());

        Ok(())
    }
}
