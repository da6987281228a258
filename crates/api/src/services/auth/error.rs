//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during registration and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field was missing or empty.
    #[error("{0}")]
    MissingFields(&'static str),

    /// Invalid credentials (wrong password or unknown email).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Email already registered.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
