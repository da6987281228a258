//! User records.
//!
//! Password hashing and verification live in the auth service; the store only
//! keeps the resulting PHC strings next to each user.

use tracing::instrument;

use bookshelf_core::{Email, UserId};

use super::{CatalogStore, StoreError};
use crate::models::User;

/// A stored user together with their password hash.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// The public user.
    pub user: User,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl CatalogStore {
    /// Whether a user with exactly this email exists.
    #[must_use]
    pub fn email_registered(&self, email: &Email) -> bool {
        self.users.iter().any(|r| r.user.email == *email)
    }

    /// Append a user. The ID is the number of users after insertion.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmailTaken` if the email is already registered.
    #[instrument(skip(self, email, password_hash), fields(email = %email))]
    pub fn insert_user(
        &mut self,
        name: &str,
        email: Email,
        password_hash: String,
    ) -> Result<User, StoreError> {
        if self.email_registered(&email) {
            return Err(StoreError::EmailTaken);
        }

        let count = i32::try_from(self.users.len()).unwrap_or(i32::MAX);
        let user = User {
            id: UserId::new(count).next(),
            name: name.to_string(),
            email,
        };

        self.users.push(UserRecord {
            user: user.clone(),
            password_hash,
        });

        Ok(user)
    }

    /// The user registered under `email` and their password hash.
    #[must_use]
    pub fn find_user_record(&self, email: &Email) -> Option<UserRecord> {
        self.users.iter().find(|r| r.user.email == *email).cloned()
    }
}
