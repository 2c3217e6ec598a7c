//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::categories::{
        data::NewCategory,
        errors::CategoriesServiceError,
        models::{ProductCategory, ProductCategoryId},
        repository::PgCategoriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(&self) -> Result<Vec<ProductCategory>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(
        &self,
        category: ProductCategoryId,
    ) -> Result<ProductCategory, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self.repository.get_category(&mut tx, category).await?;

        tx.commit().await?;

        Ok(category)
    }

    #[tracing::instrument(
        name = "categories.service.create_category",
        skip(self, category),
        fields(category_name = %category.category, subcategory_name = %category.subcategory),
        err
    )]
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<ProductCategory, CategoriesServiceError> {
        if category.category.trim().is_empty() || category.subcategory.trim().is_empty() {
            return Err(CategoriesServiceError::InvalidArgument(
                "category and subcategory must not be blank",
            ));
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_category(&mut tx, category).await?;

        tx.commit().await?;

        info!(category_id = %created.id, "created product category");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves every category, ordered by name.
    async fn list_categories(&self) -> Result<Vec<ProductCategory>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(
        &self,
        category: ProductCategoryId,
    ) -> Result<ProductCategory, CategoriesServiceError>;

    /// Creates a category/subcategory pair.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<ProductCategory, CategoriesServiceError>;
}
