//! Authentication service.
//!
//! Provides reader registration and password login against the catalog
//! store. Passwords are hashed with Argon2id and a random per-user salt; the
//! plain password never leaves this module and is never serialized.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument};

use bookshelf_core::Email;

use crate::models::User;
use crate::store::SharedCatalog;

const REGISTER_FIELDS_REQUIRED: &str = "Name, email, and password are required.";
const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required.";

/// Authentication service.
///
/// Borrows the shared catalog for the duration of one request.
pub struct AuthService<'a> {
    catalog: &'a SharedCatalog,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(catalog: &'a SharedCatalog) -> Self {
        Self { catalog }
    }

    /// Register a new reader.
    ///
    /// The email is stored exactly as given; any non-empty text is accepted.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is empty.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    #[instrument(skip(self, password))]
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<User, AuthError> {
        let email = match Email::parse(email) {
            Ok(email) if !name.is_empty() && !password.expose_secret().is_empty() => email,
            _ => return Err(AuthError::MissingFields(REGISTER_FIELDS_REQUIRED)),
        };

        // Skip the hashing cost for an email we already know is taken
        if self.catalog.read().email_registered(&email) {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = hash_password(password)?;

        let user = self
            .catalog
            .write()
            .insert_user(name, email, password_hash)
            .map_err(|_| AuthError::UserAlreadyExists)?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if either field is empty.
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &SecretString) -> Result<User, AuthError> {
        let email = match Email::parse(email) {
            Ok(email) if !password.expose_secret().is_empty() => email,
            _ => return Err(AuthError::MissingFields(LOGIN_FIELDS_REQUIRED)),
        };

        let record = self
            .catalog
            .read()
            .find_user_record(&email)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &record.password_hash)?;

        Ok(record.user)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &SecretString) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &SecretString, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.expose_secret().as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::CatalogStore;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_register_then_login() {
        let catalog = CatalogStore::seeded().into_shared();
        let auth = AuthService::new(&catalog);

        let registered = auth
            .register("Ada", "ada@example.com", &secret("hunter22"))
            .unwrap();
        let logged_in = auth.login("ada@example.com", &secret("hunter22")).unwrap();

        assert_eq!(registered, logged_in);
        assert_eq!(logged_in.id.as_i32(), 1);
    }

    #[test]
    fn test_password_is_stored_hashed() {
        let catalog = CatalogStore::seeded().into_shared();
        AuthService::new(&catalog)
            .register("Ada", "ada@example.com", &secret("hunter22"))
            .unwrap();

        let record = catalog
            .read()
            .find_user_record(&Email::parse("ada@example.com").unwrap())
            .unwrap();
        assert_ne!(record.password_hash, "hunter22");
        assert!(record.password_hash.starts_with("$argon2"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let catalog = CatalogStore::seeded().into_shared();
        let auth = AuthService::new(&catalog);
        auth.register("A", "a@example.com", &secret("same-pass")).unwrap();
        auth.register("B", "b@example.com", &secret("same-pass")).unwrap();

        let store = catalog.read();
        let a = store
            .find_user_record(&Email::parse("a@example.com").unwrap())
            .unwrap();
        let b = store
            .find_user_record(&Email::parse("b@example.com").unwrap())
            .unwrap();
        assert_ne!(a.password_hash, b.password_hash);
    }

    #[test]
    fn test_register_missing_fields() {
        let catalog = CatalogStore::seeded().into_shared();
        let auth = AuthService::new(&catalog);

        assert!(matches!(
            auth.register("", "ada@example.com", &secret("pw")),
            Err(AuthError::MissingFields(_))
        ));
        assert!(matches!(
            auth.register("Ada", "", &secret("pw")),
            Err(AuthError::MissingFields(_))
        ));
        assert!(matches!(
            auth.register("Ada", "ada@example.com", &secret("")),
            Err(AuthError::MissingFields(_))
        ));
    }

    #[test]
    fn test_register_accepts_any_email_text() {
        let catalog = CatalogStore::seeded().into_shared();
        let auth = AuthService::new(&catalog);

        let user = auth.register("Bob", "bob", &secret("pw")).unwrap();
        assert_eq!(user.email.as_str(), "bob");
        assert_eq!(auth.login("bob", &secret("pw")).unwrap(), user);
    }

    #[test]
    fn test_register_duplicate_email_regardless_of_other_fields() {
        let catalog = CatalogStore::seeded().into_shared();
        let auth = AuthService::new(&catalog);
        auth.register("Ada", "ada@example.com", &secret("first")).unwrap();

        let result = auth.register("Someone Else", "ada@example.com", &secret("second"));
        assert!(matches!(result, Err(AuthError::UserAlreadyExists)));
    }

    #[test]
    fn test_login_wrong_password() {
        let catalog = CatalogStore::seeded().into_shared();
        let auth = AuthService::new(&catalog);
        auth.register("Ada", "ada@example.com", &secret("right")).unwrap();

        assert!(matches!(
            auth.login("ada@example.com", &secret("wrong")),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_unknown_email() {
        let catalog = CatalogStore::seeded().into_shared();
        let auth = AuthService::new(&catalog);

        assert!(matches!(
            auth.login("nobody@example.com", &secret("pw")),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("nobody", &secret("pw")),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("", &secret("pw")),
            Err(AuthError::MissingFields(_))
        ));
        assert!(matches!(
            auth.login("nobody", &secret("")),
            Err(AuthError::MissingFields(_))
        ));
    }
}
