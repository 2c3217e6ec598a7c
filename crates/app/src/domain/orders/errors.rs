//! Orders service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order, cart, payment or user not found")]
    NotFound,

    #[error("invalid order state: {0}")]
    InvalidState(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("storage error")]
    Persistence(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let Some(database_error) = error.as_database_error() else {
            return Self::Persistence(error);
        };

        match database_error.kind() {
            ErrorKind::ForeignKeyViolation => Self::NotFound,
            ErrorKind::UniqueViolation => match database_error.constraint() {
                Some("orders_payment_id_key") => {
                    Self::InvalidState("payment has already been used for an order")
                }
                _ => Self::InvalidState("cart has already been ordered"),
            },
            ErrorKind::Other | _ => Self::Persistence(error),
        }
    }
}
