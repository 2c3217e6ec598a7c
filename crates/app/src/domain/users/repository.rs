//! Users Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::users::{
    data::NewUser,
    models::{PasswordHash, User, UserCredentials, UserId},
};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const GET_USER_CREDENTIALS_SQL: &str = include_str!("sql/get_user_credentials.sql");
const LOCK_USER_SQL: &str = include_str!("sql/lock_user.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgUsersRepository;

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: NewUser,
    ) -> Result<User, sqlx::Error> {
        query_as::<Postgres, User>(CREATE_USER_SQL)
            .bind(user.first_name)
            .bind(user.last_name)
            .bind(user.email)
            .bind(user.password_hash.expose())
            .bind(user.address)
            .bind(user.mobile)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
    ) -> Result<User, sqlx::Error> {
        query_as::<Postgres, User>(GET_USER_SQL)
            .bind(user.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_user_credentials(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<UserCredentials, sqlx::Error> {
        query_as::<Postgres, UserCredentials>(GET_USER_CREDENTIALS_SQL)
            .bind(email)
            .fetch_one(&mut **tx)
            .await
    }

    /// Lock the user row until the transaction ends.
    ///
    /// Every cart mutation takes this lock first, so concurrent mutations of
    /// one user's carts run one after another. Returns `false` when the user
    /// does not exist.
    pub(crate) async fn lock_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
    ) -> Result<bool, sqlx::Error> {
        let locked: Option<i64> = query_scalar(LOCK_USER_SQL)
            .bind(user.into_i64())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(locked.is_some())
    }
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: UserId::from_i64(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            address: row.try_get("address")?,
            mobile: row.try_get("mobile")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            modified_at: row.try_get::<SqlxTimestamp, _>("modified_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for UserCredentials {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            user: User::from_row(row)?,
            password_hash: PasswordHash::new(row.try_get::<String, _>("password_hash")?),
        })
    }
}
