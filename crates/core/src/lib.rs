//! Bookshelf Core - Shared types library.
//!
//! This crate provides the identifier and email types used by the catalog
//! HTTP service (`bookshelf-api`).
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no shared
//! state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and email addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
