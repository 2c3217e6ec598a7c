//! Reviews service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        products::models::ProductId,
        reviews::{
            data::NewReview,
            errors::ReviewsServiceError,
            models::{MAX_RATING, MIN_RATING, Review},
            repository::PgReviewsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    #[tracing::instrument(
        name = "reviews.service.add_review",
        skip(self, review),
        fields(product_id = %review.product, user_id = %review.user, rating = review.rating),
        err
    )]
    async fn add_review(&self, review: NewReview) -> Result<Review, ReviewsServiceError> {
        if !(MIN_RATING..=MAX_RATING).contains(&review.rating) {
            return Err(ReviewsServiceError::InvalidArgument(
                "rating must be between 1 and 5",
            ));
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_review(&mut tx, review).await?;

        tx.commit().await?;

        info!(review_id = %created.id, "added review");

        Ok(created)
    }

    async fn list_product_reviews(
        &self,
        product: ProductId,
    ) -> Result<Vec<Review>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self
            .repository
            .list_product_reviews(&mut tx, product)
            .await?;

        tx.commit().await?;

        Ok(reviews)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Adds a star rating, with an optional comment, to a product.
    async fn add_review(&self, review: NewReview) -> Result<Review, ReviewsServiceError>;

    /// Reviews of a product, oldest first.
    async fn list_product_reviews(
        &self,
        product: ProductId,
    ) -> Result<Vec<Review>, ReviewsServiceError>;
}
