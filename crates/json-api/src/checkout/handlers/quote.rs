//! Checkout Quote Handler

use std::sync::Arc;

use kiosk::quote::{Quote, plain_amount};
use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{checkout::errors::into_status_error, extensions::*, state::State};

/// Checkout Quote Response
///
/// Amounts are exact decimal strings; rounding to two decimals is the
/// caller's presentation concern.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteResponse {
    /// Shipping tier the quote was priced under
    pub shipping_tier: String,

    /// ISO currency code
    pub currency: String,

    /// Sum of all extended line prices
    pub subtotal: String,

    /// Flat fee for the selected shipping tier
    pub shipping: String,

    /// Tax on subtotal plus shipping
    pub tax: String,

    /// Subtotal plus shipping plus tax
    pub total: String,
}

impl QuoteResponse {
    fn new(tier: &str, quote: &Quote<'_>) -> Self {
        Self {
            shipping_tier: tier.to_string(),
            currency: quote.subtotal().currency().iso_alpha_code.to_string(),
            subtotal: plain_amount(&quote.subtotal()),
            shipping: plain_amount(&quote.shipping()),
            tax: plain_amount(&quote.tax()),
            total: plain_amount(&quote.total()),
        }
    }
}

/// Checkout Quote Handler
///
/// Prices the caller's current cart under the given shipping tier
/// (`shipping=standard|express`, default standard). The cart itself is not
/// modified.
#[endpoint(
    tags("checkout"),
    summary = "Quote Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Priced breakdown of the current cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown shipping tier"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    shipping: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<QuoteResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_or_401()?;
    let tier = shipping.into_shipping_tier()?;

    let quote = state
        .app
        .checkout
        .quote(customer.uuid, tier)
        .await
        .map_err(into_status_error)?;

    Ok(Json(QuoteResponse::new(tier.as_str(), &quote)))
}
