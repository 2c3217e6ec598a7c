//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart, user or product not found")]
    NotFound,

    #[error("invalid cart state: {0}")]
    InvalidState(&'static str),

    #[error("storage error")]
    Persistence(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::NotFound,
            Some(ErrorKind::UniqueViolation) => {
                Self::InvalidState("user already has an open cart")
            }
            Some(ErrorKind::Other | _) | None => Self::Persistence(error),
        }
    }
}
