//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use kiosk_app::{
    auth::{AuthenticatedCustomer, MockAuthService},
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartItem, CartItemUuid, CartUuid},
        },
        checkout::MockCheckoutService,
        customers::models::{CustomerUuid, Role},
        orders::{
            MockOrdersService, OrderStatus,
            models::{Order, OrderItem, OrderItemUuid, OrderUuid},
        },
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_CUSTOMER_UUID: CustomerUuid = CustomerUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_customer(AuthenticatedCustomer {
        uuid: TEST_CUSTOMER_UUID,
        role: Role::Customer,
    });
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_customer(AuthenticatedCustomer {
        uuid: TEST_CUSTOMER_UUID,
        role: Role::Admin,
    });
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_product(uuid: ProductUuid, price: u64) -> Product {
    Product {
        uuid,
        name: "Test Product".to_string(),
        price,
        stock: 25,
        image: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_cart() -> Cart {
    Cart {
        uuid: CartUuid::new(),
        customer_uuid: TEST_CUSTOMER_UUID,
        items: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_item(product: ProductUuid, unit_price: u64, quantity: u32) -> CartItem {
    CartItem {
        uuid: CartItemUuid::new(),
        product_uuid: product,
        name: "Test Product".to_string(),
        unit_price,
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(status: OrderStatus) -> Order {
    Order {
        uuid: OrderUuid::new(),
        customer_uuid: TEST_CUSTOMER_UUID,
        status,
        items: vec![OrderItem {
            uuid: OrderItemUuid::new(),
            name: "Test Product".to_string(),
            quantity: 1,
            unit_price: 100,
            created_at: Timestamp::UNIX_EPOCH,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_set_item_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear_cart().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_place_order().never();
    orders.expect_list_orders().never();
    orders.expect_get_order().never();
    orders.expect_update_status().never();
    orders.expect_cancel_order().never();

    orders
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_quote().never();

    checkout
}

struct Mocks {
    products: MockProductsService,
    carts: MockCartsService,
    orders: MockOrdersService,
    checkout: MockCheckoutService,
    auth: MockAuthService,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            products: strict_products_mock(),
            carts: strict_carts_mock(),
            orders: strict_orders_mock(),
            checkout: strict_checkout_mock(),
            auth: strict_auth_mock(),
        }
    }
}

fn state_from(mocks: Mocks) -> Arc<State> {
    Arc::new(State::new(AppContext {
        products: Arc::new(mocks.products),
        carts: Arc::new(mocks.carts),
        orders: Arc::new(mocks.orders),
        checkout: Arc::new(mocks.checkout),
        auth: Arc::new(mocks.auth),
    }))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state_from(Mocks {
        auth,
        ..Mocks::default()
    })
}

fn service_with(state: Arc<State>, authn: impl Handler, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(authn)
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    let state = state_from(Mocks {
        products,
        ..Mocks::default()
    });

    service_with(state, inject_customer, route)
}

pub(crate) fn products_admin_service(products: MockProductsService, route: Router) -> Service {
    let state = state_from(Mocks {
        products,
        ..Mocks::default()
    });

    service_with(state, inject_admin, route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    let state = state_from(Mocks {
        carts,
        ..Mocks::default()
    });

    service_with(state, inject_customer, route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    let state = state_from(Mocks {
        orders,
        ..Mocks::default()
    });

    service_with(state, inject_customer, route)
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    let state = state_from(Mocks {
        checkout,
        ..Mocks::default()
    });

    service_with(state, inject_customer, route)
}
