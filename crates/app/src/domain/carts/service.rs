//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartId, CartItem},
            repositories::{CartRecord, PgCartItemsRepository, PgCartsRepository},
        },
        products::models::ProductId,
        users::{models::UserId, repository::PgUsersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    users_repository: PgUsersRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            users_repository: PgUsersRepository::new(),
        }
    }

    /// Attach the owning user and the resolved items to a cart row.
    async fn assemble(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: CartRecord,
    ) -> Result<Cart, CartsServiceError> {
        let user = self.users_repository.get_user(tx, record.user_id).await?;

        let items = self.items_repository.get_cart_items(tx, record.id).await?;

        Ok(record.into_cart(user, items))
    }

    async fn lock_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
    ) -> Result<(), CartsServiceError> {
        if self.users_repository.lock_user(tx, user).await? {
            Ok(())
        } else {
            Err(CartsServiceError::NotFound)
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_active_cart(&self, user: UserId) -> Result<Option<Cart>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let owner = self.users_repository.get_user(&mut tx, user).await?;

        let Some(record) = self.carts_repository.find_open_cart(&mut tx, user).await? else {
            tx.commit().await?;

            return Ok(None);
        };

        let items = self
            .items_repository
            .get_cart_items(&mut tx, record.id)
            .await?;

        tx.commit().await?;

        Ok(Some(record.into_cart(owner, items)))
    }

    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.carts_repository.get_cart(&mut tx, cart).await?;

        let cart = self.assemble(&mut tx, record).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn get_previous_carts(&self, user: UserId) -> Result<Vec<Cart>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let owner = self.users_repository.get_user(&mut tx, user).await?;

        let records = self
            .carts_repository
            .list_ordered_carts(&mut tx, user)
            .await?;

        let mut carts = Vec::with_capacity(records.len());

        for record in records {
            let items = self
                .items_repository
                .get_cart_items(&mut tx, record.id)
                .await?;

            carts.push(record.into_cart(owner.clone(), items));
        }

        tx.commit().await?;

        Ok(carts)
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self),
        fields(user_id = %user, product_id = %product),
        err
    )]
    async fn add_item(
        &self,
        user: UserId,
        product: ProductId,
    ) -> Result<CartItem, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.lock_user(&mut tx, user).await?;

        let cart = match self.carts_repository.find_open_cart(&mut tx, user).await? {
            Some(cart) => cart,
            None => {
                let opened = self.carts_repository.open_cart(&mut tx, user).await?;

                info!(cart_id = %opened.id, "opened cart");

                opened
            }
        };

        let item = self
            .items_repository
            .create_cart_item(&mut tx, cart.id, product)
            .await?;

        tx.commit().await?;

        info!(cart_id = %item.cart_id, cart_item_id = %item.id, "added cart item");

        Ok(item)
    }

    #[tracing::instrument(
        name = "carts.service.add_item_to_cart",
        skip(self),
        fields(user_id = %user, cart_id = %cart, product_id = %product),
        err
    )]
    async fn add_item_to_cart(
        &self,
        user: UserId,
        cart: CartId,
        product: ProductId,
    ) -> Result<CartItem, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.lock_user(&mut tx, user).await?;

        let record = self
            .carts_repository
            .lock_cart(&mut tx, cart)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        record
            .ensure_open_for(user)
            .map_err(CartsServiceError::InvalidState)?;

        let item = self
            .items_repository
            .create_cart_item(&mut tx, record.id, product)
            .await?;

        tx.commit().await?;

        info!(cart_item_id = %item.id, "added cart item");

        Ok(item)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The user's open cart, or `None` when the user has no open cart.
    async fn get_active_cart(&self, user: UserId) -> Result<Option<Cart>, CartsServiceError>;

    /// Retrieve a single cart, open or ordered.
    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError>;

    /// Every ordered cart of the user, oldest order first.
    async fn get_previous_carts(&self, user: UserId) -> Result<Vec<Cart>, CartsServiceError>;

    /// Add a product to the user's open cart, opening one if the user has none.
    async fn add_item(
        &self,
        user: UserId,
        product: ProductId,
    ) -> Result<CartItem, CartsServiceError>;

    /// Add a product to a specific cart, which must be open and owned by `user`.
    async fn add_item_to_cart(
        &self,
        user: UserId,
        cart: CartId,
        product: ProductId,
    ) -> Result<CartItem, CartsServiceError>;
}
