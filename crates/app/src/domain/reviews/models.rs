//! Review Models

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    domain::{products::models::ProductId, users::models::UserId},
    ids::TypedId,
};

/// Review Id
pub type ReviewId = TypedId<Review>;

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

/// Review Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}
