//! Auth errors.

use thiserror::Error;

use crate::auth::token::ApiTokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// The token is unknown, revoked, expired, or fails verification.
    /// Deliberately indistinguishable from the outside.
    #[error("token not found")]
    NotFound,

    #[error("failed to process api token")]
    Token(#[from] ApiTokenError),

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for AuthServiceError {
    fn from(error: sqlx::Error) -> Self {
        if matches!(error, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
