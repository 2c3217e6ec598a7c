//! User Models

use std::fmt;

use jiff::Timestamp;
use serde::Serialize;
use zeroize::Zeroize;

use crate::ids::TypedId;

/// User Id
pub type UserId = TypedId<User>;

/// User Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

/// Opaque, already-hashed credential. Never printed, wiped on drop.
#[derive(Clone)]
pub struct PasswordHash(String);

impl PasswordHash {
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(**redacted**)")
    }
}

impl Drop for PasswordHash {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// A user together with the stored credential, for login flows.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: PasswordHash,
}
