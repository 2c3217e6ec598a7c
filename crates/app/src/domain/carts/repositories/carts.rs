//! Carts Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    carts::models::{Cart, CartId, CartItem},
    users::models::{User, UserId},
};

const GET_CART_SQL: &str = include_str!("../sql/get_cart.sql");
const LOCK_CART_SQL: &str = include_str!("../sql/lock_cart.sql");
const FIND_OPEN_CART_SQL: &str = include_str!("../sql/find_open_cart.sql");
const LIST_ORDERED_CARTS_SQL: &str = include_str!("../sql/list_ordered_carts.sql");
const OPEN_CART_SQL: &str = include_str!("../sql/open_cart.sql");
const MARK_CART_ORDERED_SQL: &str = include_str!("../sql/mark_cart_ordered.sql");

/// Cart row as stored, before its owner and items are attached.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CartRecord {
    pub id: CartId,
    pub user_id: UserId,
    pub ordered: bool,
    pub ordered_on: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl CartRecord {
    pub(crate) fn into_cart(self, user: User, items: Vec<CartItem>) -> Cart {
        Cart {
            id: self.id,
            user,
            ordered: self.ordered,
            ordered_on: self.ordered_on,
            items,
            created_at: self.created_at,
        }
    }

    /// Checks that `user` may still change this cart, returning the reason
    /// when they may not.
    pub(crate) fn ensure_open_for(&self, user: UserId) -> Result<(), &'static str> {
        if self.user_id != user {
            return Err("cart belongs to another user");
        }

        if self.ordered {
            return Err("cart has already been ordered");
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_CART_SQL)
            .bind(cart.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Read the cart and hold a row lock on it until the transaction ends.
    pub(crate) async fn lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<Option<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LOCK_CART_SQL)
            .bind(cart.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_open_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
    ) -> Result<Option<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(FIND_OPEN_CART_SQL)
            .bind(user.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_ordered_carts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
    ) -> Result<Vec<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LIST_ORDERED_CARTS_SQL)
            .bind(user.into_i64())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn open_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(OPEN_CART_SQL)
            .bind(user.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Flip an open cart to ordered. Returns the number of rows changed, which
    /// is zero when the cart was already ordered.
    pub(crate) async fn mark_ordered(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(MARK_CART_ORDERED_SQL)
            .bind(cart.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CartId::from_i64(row.try_get("id")?),
            user_id: UserId::from_i64(row.try_get("user_id")?),
            ordered: row.try_get("ordered")?,
            ordered_on: row
                .try_get::<Option<SqlxTimestamp>, _>("ordered_on")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
