//! Errors

use salvo::http::StatusError;
use tracing::error;

use kiosk_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::NotFound => StatusError::not_found(),
        ProductsServiceError::Sql(source) => {
            error!("products storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
