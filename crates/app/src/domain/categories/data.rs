//! Category Data

/// New Category Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub category: String,
    pub subcategory: String,
}
