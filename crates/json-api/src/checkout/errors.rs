//! Errors

use salvo::http::StatusError;
use tracing::error;

use kiosk_app::domain::checkout::CheckoutServiceError;

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    // Pricing failures here mean stored data the service itself wrote is
    // out of range; none of them are the caller's fault.
    match error {
        CheckoutServiceError::AmountTooLarge | CheckoutServiceError::Pricing(_) => {
            error!("checkout pricing failure: {error}");

            StatusError::internal_server_error()
        }
        CheckoutServiceError::Sql(source) => {
            error!("checkout storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
