//! App Router

use salvo::Router;

use crate::{auth, cart, checkout, orders, products};

/// All authenticated application routes.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("cart")
                .get(cart::get::handler)
                .delete(cart::clear::handler)
                .push(
                    Router::with_path("items")
                        .post(cart::add_item::handler)
                        .push(
                            Router::with_path("{product}")
                                .put(cart::update_item::handler)
                                .delete(cart::remove_item::handler),
                        ),
                ),
        )
        .push(Router::with_path("checkout/quote").get(checkout::quote::handler))
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .delete(orders::cancel::handler)
                        .push(Router::with_path("status").put(orders::update_status::handler)),
                ),
        )
}
