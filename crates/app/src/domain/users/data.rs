//! User Data

use crate::domain::users::models::PasswordHash;

/// New User Data
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: PasswordHash,
    pub address: Option<String>,
    pub mobile: Option<String>,
}
