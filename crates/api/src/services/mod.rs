//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Reader registration and password login
//! - `retrieval` - Deferred catalog reads with a configurable delay

pub mod auth;
pub mod retrieval;

pub use auth::{AuthError, AuthService};
pub use retrieval::DelayedRetrieval;
