//! External volumes search.
//!
//! # Architecture
//!
//! - One `reqwest` round trip per search, bounded by the configured timeout
//! - No caching and no retry
//! - Results are reshaped into [`VolumeSummary`] records
//!
//! # Example
//!
//! ```rust,ignore
//! use bookshelf_api::lookup::{SearchField, VolumesClient};
//!
//! let client = VolumesClient::new(&config.lookup)?;
//! let volumes = client.search(SearchField::Author, "Ursula K. Le Guin").await?;
//! ```

mod client;
pub mod types;

pub use client::VolumesClient;
pub use types::{NO_ISBN, VolumeSummary};

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when calling the volumes API.
#[derive(Debug, Error)]
pub enum LookupError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The call did not complete within the configured timeout.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which volume attribute a search term applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Match against the author list.
    Author,
    /// Match against the title.
    Title,
}

impl SearchField {
    /// The query keyword understood by the volumes API.
    #[must_use]
    pub const fn qualifier(self) -> &'static str {
        match self {
            Self::Author => "inauthor",
            Self::Title => "intitle",
        }
    }

    /// Build the `q` parameter for a search term.
    #[must_use]
    pub fn query(self, term: &str) -> String {
        format!("{}:{term}", self.qualifier())
    }
}
