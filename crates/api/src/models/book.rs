//! Book and review domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use bookshelf_core::{BookId, ReviewId};

/// A book in the catalog.
///
/// Books are created from the seed list at startup and are never deleted.
/// Only their reviews change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Stable numeric ID.
    pub id: BookId,
    /// Book title.
    pub title: String,
    /// Author as printed on the cover.
    pub author: String,
    /// Shelf price, serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// ISBN-13, unique across the catalog.
    pub isbn: String,
    /// Reviews in the order they were added.
    pub reviews: Vec<Review>,
}

impl Book {
    /// Whether the author matches `author`, ignoring case.
    #[must_use]
    pub fn is_by(&self, author: &str) -> bool {
        self.author.to_lowercase() == author.to_lowercase()
    }

    /// Whether the title contains `fragment`, ignoring case.
    #[must_use]
    pub fn title_contains(&self, fragment: &str) -> bool {
        self.title.to_lowercase().contains(&fragment.to_lowercase())
    }

    /// Position of the first review whose text matches `comment`, ignoring case.
    #[must_use]
    pub fn review_position(&self, comment: &str) -> Option<usize> {
        self.reviews.iter().position(|r| r.matches(comment))
    }
}

/// A reader's review of a book.
///
/// Reviews carry a generated ID, but lookups still go through the comment
/// text: two reviews on one book never share the same text ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    /// Generated review ID.
    pub id: ReviewId,
    /// Review text.
    pub comment: String,
    /// When the review was first written.
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Create a review stamped with the current time.
    #[must_use]
    pub fn new(id: ReviewId, comment: impl Into<String>) -> Self {
        Self {
            id,
            comment: comment.into(),
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive comparison against the review text.
    #[must_use]
    pub fn matches(&self, comment: &str) -> bool {
        self.comment.to_lowercase() == comment.to_lowercase()
    }
}

/// Whether an upsert appended a review or rewrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// A new review was appended.
    Created,
    /// An existing review's text was replaced.
    Updated,
}
