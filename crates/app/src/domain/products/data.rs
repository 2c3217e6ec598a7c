//! Products Data

use rust_decimal::Decimal;

use crate::domain::categories::models::ProductCategoryId;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: u32,
    pub image_name: Option<String>,
    pub category: ProductCategoryId,
}

/// Product Update Data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductUpdate {
    pub price: Decimal,
    pub quantity: u32,
}

/// Product listing filter: up to `count` products of one subcategory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: String,
    pub subcategory: String,
    pub count: u32,
}
