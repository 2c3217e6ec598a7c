//! Users service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::users::{
        data::NewUser,
        errors::UsersServiceError,
        models::{User, UserCredentials, UserId},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    #[tracing::instrument(name = "users.service.register_user", skip_all, err)]
    async fn register_user(&self, user: NewUser) -> Result<User, UsersServiceError> {
        if !user.email.contains('@') {
            return Err(UsersServiceError::InvalidArgument("email address is malformed"));
        }

        if user.password_hash.expose().is_empty() {
            return Err(UsersServiceError::InvalidArgument(
                "password hash must not be empty",
            ));
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_user(&mut tx, user).await?;

        tx.commit().await?;

        info!(user_id = %created.id, "registered user");

        Ok(created)
    }

    async fn get_user(&self, user: UserId) -> Result<User, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn get_user_credentials(
        &self,
        email: String,
    ) -> Result<UserCredentials, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let credentials = self
            .repository
            .get_user_credentials(&mut tx, &email)
            .await?;

        tx.commit().await?;

        Ok(credentials)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Registers a new user. Emails are unique.
    async fn register_user(&self, user: NewUser) -> Result<User, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserId) -> Result<User, UsersServiceError>;

    /// Looks up a user and the stored credential by email.
    ///
    /// Checking the credential is up to the caller.
    async fn get_user_credentials(
        &self,
        email: String,
    ) -> Result<UserCredentials, UsersServiceError>;
}
