//! Payments service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::money::AmountError;

#[derive(Debug, Error)]
pub enum PaymentsServiceError {
    #[error("payment, payment method or user not found")]
    NotFound,

    #[error("invalid payment state: {0}")]
    InvalidState(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("storage error")]
    Persistence(#[source] Error),
}

impl From<Error> for PaymentsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::NotFound,
            Some(ErrorKind::CheckViolation) => {
                Self::InvalidArgument("amount violates a payment constraint")
            }
            Some(ErrorKind::Other | _) | None => Self::Persistence(error),
        }
    }
}

impl From<AmountError> for PaymentsServiceError {
    fn from(error: AmountError) -> Self {
        Self::InvalidArgument(error.as_str())
    }
}
