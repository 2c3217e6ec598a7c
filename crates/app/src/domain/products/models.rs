//! Product Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{domain::categories::models::ProductCategory, ids::TypedId};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product Model
///
/// Carries its category resolved, so a product read from a cart or a listing
/// needs no follow-up lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: u32,
    pub image_name: Option<String>,
    pub category: ProductCategory,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
