//! Products service errors.

use std::num::TryFromIntError;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::money::AmountError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("storage error")]
    Persistence(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::NotFound,
            Some(ErrorKind::CheckViolation) => {
                Self::InvalidArgument("value violates a catalog constraint")
            }
            Some(ErrorKind::Other | _) | None => Self::Persistence(error),
        }
    }
}

impl From<AmountError> for ProductsServiceError {
    fn from(error: AmountError) -> Self {
        Self::InvalidArgument(error.as_str())
    }
}

impl From<TryFromIntError> for ProductsServiceError {
    fn from(_: TryFromIntError) -> Self {
        Self::InvalidArgument("quantity is too large")
    }
}
