//! Offer Models

use serde::Serialize;

use crate::ids::TypedId;

/// Offer Id
pub type OfferId = TypedId<Offer>;

/// Offer Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offer {
    pub id: OfferId,
    pub title: Option<String>,

    /// Percentage off, between 0 and 100.
    pub discount: u32,
}
