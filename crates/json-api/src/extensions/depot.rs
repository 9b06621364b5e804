//! Depot helper extensions.

use std::any::Any;

use kiosk_app::auth::AuthenticatedCustomer;
use salvo::prelude::{Depot, StatusError};

const AUTHENTICATED_CUSTOMER_KEY: &str = "authenticated_customer";

/// Helpers for pulling request-scoped values out of the depot and mapping
/// absence to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the authenticated caller; set by the auth middleware.
    fn insert_customer(&mut self, customer: AuthenticatedCustomer);

    /// The authenticated caller, or 401 when the middleware did not run.
    fn customer_or_401(&self) -> Result<AuthenticatedCustomer, StatusError>;

    /// The authenticated caller if they may manage the catalogue, or 403.
    fn admin_or_403(&self) -> Result<AuthenticatedCustomer, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_customer(&mut self, customer: AuthenticatedCustomer) {
        self.insert(AUTHENTICATED_CUSTOMER_KEY, customer);
    }

    fn customer_or_401(&self) -> Result<AuthenticatedCustomer, StatusError> {
        self.get::<AuthenticatedCustomer>(AUTHENTICATED_CUSTOMER_KEY)
            .copied()
            .map_err(|_missing| StatusError::unauthorized().brief("Authentication required"))
    }

    fn admin_or_403(&self) -> Result<AuthenticatedCustomer, StatusError> {
        let customer = self.customer_or_401()?;

        if !customer.role.can_manage_catalogue() {
            return Err(StatusError::forbidden().brief("Catalogue management requires admin role"));
        }

        Ok(customer)
    }
}
