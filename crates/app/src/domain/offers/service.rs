//! Offers service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::offers::{
        errors::OffersServiceError,
        models::{Offer, OfferId},
        repository::PgOffersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOffersService {
    db: Db,
    repository: PgOffersRepository,
}

impl PgOffersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOffersRepository::new(),
        }
    }
}

#[async_trait]
impl OffersService for PgOffersService {
    #[tracing::instrument(name = "offers.service.get_offer", skip(self), fields(offer_id = %offer), err)]
    async fn get_offer(&self, offer: OfferId) -> Result<Offer, OffersServiceError> {
        let mut tx = self.db.begin().await?;

        let offer = self.repository.get_offer(&mut tx, offer).await?;

        tx.commit().await?;

        Ok(offer)
    }
}

#[automock]
#[async_trait]
pub trait OffersService: Send + Sync {
    /// Retrieve a single offer.
    async fn get_offer(&self, offer: OfferId) -> Result<Offer, OffersServiceError>;
}
