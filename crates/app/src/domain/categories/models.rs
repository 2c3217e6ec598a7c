//! Category Models

use serde::Serialize;

use crate::ids::TypedId;

/// Product Category Id
pub type ProductCategoryId = TypedId<ProductCategory>;

/// Product Category Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCategory {
    pub id: ProductCategoryId,
    pub category: String,
    pub subcategory: String,
}
