//! Errors

use salvo::http::StatusError;
use tracing::error;

use kiosk_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::EmptyCart => {
            StatusError::bad_request().brief("Cannot place an order from an empty cart")
        }
        OrdersServiceError::InvalidTransition { from, to } => StatusError::conflict().brief(
            format!("Illegal status transition: {} -> {}", from.as_str(), to.as_str()),
        ),
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::InvalidReference => {
            StatusError::bad_request().brief("A cart line references an unknown product")
        }
        OrdersServiceError::MissingRequiredData | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::NotFound => StatusError::not_found(),
        OrdersServiceError::Sql(source) => {
            error!("orders storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
