//! Orders

pub(crate) mod errors;
pub(crate) mod handlers;

pub(crate) use handlers::{cancel, create, get, index, update_status};
