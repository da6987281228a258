//! Domain models for the catalog.
//!
//! These are the shapes handed out by the store and serialized into
//! response envelopes.

pub mod book;
pub mod envelope;
pub mod user;

pub use book::{Book, Review, ReviewOutcome};
pub use envelope::{ApiResponse, Envelope};
pub use user::User;
