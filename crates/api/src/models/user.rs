//! User domain types.

use serde::Serialize;

use bookshelf_core::{Email, UserId};

/// A registered reader.
///
/// This is the only user shape that leaves the service. Password hashes are
/// kept next to it inside the store and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Sequential user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique across users.
    pub email: Email,
}
