//! Review Data

use crate::domain::{products::models::ProductId, users::models::UserId};

/// New Review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub product: ProductId,
    pub user: UserId,
    pub rating: u8,
    pub comment: Option<String>,
}
