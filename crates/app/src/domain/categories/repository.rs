//! Categories Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::categories::{
    data::NewCategory,
    models::{ProductCategory, ProductCategoryId},
};

const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCategoriesRepository;

impl PgCategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductCategory>, sqlx::Error> {
        query_as::<Postgres, ProductCategory>(LIST_CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: ProductCategoryId,
    ) -> Result<ProductCategory, sqlx::Error> {
        query_as::<Postgres, ProductCategory>(GET_CATEGORY_SQL)
            .bind(category.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: NewCategory,
    ) -> Result<ProductCategory, sqlx::Error> {
        query_as::<Postgres, ProductCategory>(CREATE_CATEGORY_SQL)
            .bind(category.category)
            .bind(category.subcategory)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductCategory {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductCategoryId::from_i64(row.try_get("id")?),
            category: row.try_get("category")?,
            subcategory: row.try_get("subcategory")?,
        })
    }
}
