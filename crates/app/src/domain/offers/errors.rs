//! Offers service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OffersServiceError {
    #[error("offer not found")]
    NotFound,

    #[error("storage error")]
    Persistence(#[source] Error),
}

impl From<Error> for OffersServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            other => Self::Persistence(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = OffersServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, OffersServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn pool_errors_are_persistence_failures() {
        let error = OffersServiceError::from(Error::PoolClosed);

        assert!(
            matches!(error, OffersServiceError::Persistence(Error::PoolClosed)),
            "expected Persistence, got {error:?}"
        );
    }
}
