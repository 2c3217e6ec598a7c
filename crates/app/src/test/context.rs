//! Test context for service-level integration tests.

use rust_decimal::Decimal;

use crate::{
    database::Db,
    domain::{
        carts::PgCartsService,
        categories::{
            CategoriesService, PgCategoriesService,
            data::NewCategory,
            models::{ProductCategory, ProductCategoryId},
        },
        offers::PgOffersService,
        orders::PgOrdersService,
        payments::{
            PaymentsService, PgPaymentsService,
            data::NewPayment,
            models::{PaymentId, PaymentMethodId},
        },
        products::{
            PgProductsService, ProductsService,
            data::NewProduct,
            models::Product,
        },
        reviews::PgReviewsService,
        users::{
            PgUsersService, UsersService,
            data::NewUser,
            models::{PasswordHash, User, UserId},
        },
    },
};

use super::db::TestDb;

/// Seeded id of the available Visa card method.
const CARD_PAYMENT_METHOD: PaymentMethodId = PaymentMethodId::from_i64(1);

/// Every storefront service wired to a fresh, migrated database.
pub(crate) struct TestContext {
    pub db: TestDb,
    pub categories: PgCategoriesService,
    pub products: PgProductsService,
    pub users: PgUsersService,
    pub carts: PgCartsService,
    pub payments: PgPaymentsService,
    pub orders: PgOrdersService,
    pub reviews: PgReviewsService,
    pub offers: PgOffersService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            categories: PgCategoriesService::new(db.clone()),
            products: PgProductsService::new(db.clone()),
            users: PgUsersService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            payments: PgPaymentsService::new(db.clone()),
            orders: PgOrdersService::new(db.clone()),
            reviews: PgReviewsService::new(db.clone()),
            offers: PgOffersService::new(db),
            db: test_db,
        }
    }

    pub(crate) async fn create_category(&self, category: &str, subcategory: &str) -> ProductCategory {
        self.categories
            .create_category(NewCategory {
                category: category.to_string(),
                subcategory: subcategory.to_string(),
            })
            .await
            .expect("Failed to create test category")
    }

    pub(crate) async fn create_product(
        &self,
        category: ProductCategoryId,
        price: Decimal,
        quantity: u32,
    ) -> Product {
        self.products
            .create_product(NewProduct {
                title: format!("Product at {price}"),
                description: None,
                price,
                quantity,
                image_name: Some("product.png".to_string()),
                category,
            })
            .await
            .expect("Failed to create test product")
    }

    pub(crate) async fn create_user(&self, email: &str) -> User {
        self.users
            .register_user(NewUser {
                first_name: "Test".to_string(),
                last_name: "Shopper".to_string(),
                email: email.to_string(),
                password_hash: PasswordHash::new("hashed-credential"),
                address: Some("1 Market Street".to_string()),
                mobile: None,
            })
            .await
            .expect("Failed to create test user")
    }

    /// Record a card payment of `amount` for `user`.
    pub(crate) async fn record_payment(&self, user: UserId, amount: Decimal) -> PaymentId {
        self.payments
            .record_payment(NewPayment {
                user,
                amount,
                method: CARD_PAYMENT_METHOD,
            })
            .await
            .expect("Failed to record test payment")
    }
}
