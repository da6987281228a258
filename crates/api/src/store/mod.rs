//! In-memory catalog store.
//!
//! # Collections
//!
//! - `books` - Seeded at startup, each with nested reviews. Never deleted.
//! - `users` - Empty at startup, appended by registration.
//!
//! Nothing is persisted; all state resets on restart.
//!
//! The store itself is a plain struct with `&self`/`&mut self` operations.
//! The application shares it as a [`SharedCatalog`] and takes the lock for
//! one synchronous step per operation, so no guard outlives an await point.

mod books;
mod seed;
mod users;

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use bookshelf_core::{BookId, ReviewId};

use crate::models::Book;

pub use seed::seed_books;
pub use users::UserRecord;

/// The catalog store shared across request handlers.
pub type SharedCatalog = Arc<RwLock<CatalogStore>>;

/// Errors reported by catalog operations.
///
/// The display text of each variant is the message sent to clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// No book has the requested ISBN.
    #[error("No book found with ISBN {0}")]
    IsbnNotFound(String),

    /// No book is by the requested author.
    #[error("No books found by author {0}")]
    AuthorNotFound(String),

    /// No title contains the requested fragment.
    #[error("No books found with title \"{0}\"")]
    TitleNotFound(String),

    /// No book has the requested ID (or the ID was not numeric).
    #[error("No book found with ID {0}")]
    BookNotFound(String),

    /// The book has no review with matching text.
    #[error("No review found with the comment \"{comment}\" for book \"{title}\"")]
    ReviewNotFound { comment: String, title: String },

    /// The email is already registered.
    #[error("Email is already registered.")]
    EmailTaken,
}

impl StoreError {
    /// Whether this error means a requested entity does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::IsbnNotFound(_)
                | Self::AuthorNotFound(_)
                | Self::TitleNotFound(_)
                | Self::BookNotFound(_)
                | Self::ReviewNotFound { .. }
        )
    }
}

/// Owner of the book and user collections.
#[derive(Debug)]
pub struct CatalogStore {
    books: Vec<Book>,
    users: Vec<UserRecord>,
    last_review_id: ReviewId,
}

impl CatalogStore {
    /// Create a store holding the given books and no users.
    ///
    /// Review IDs for new reviews continue after the highest seeded one.
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        let last_review_id = books
            .iter()
            .flat_map(|b| b.reviews.iter().map(|r| r.id))
            .max()
            .unwrap_or_else(|| ReviewId::new(0));

        Self {
            books,
            users: Vec::new(),
            last_review_id,
        }
    }

    /// Create a store from the built-in seed list.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    /// Wrap the store for sharing across handlers.
    #[must_use]
    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(RwLock::new(self))
    }
}

/// Parse a book ID from path input.
///
/// Reads an optional sign and the leading run of digits after any leading
/// whitespace, ignoring the rest (`"2.5"` is 2, `"1abc"` is 1). Input without
/// leading digits matches no book rather than failing.
fn parse_book_id(raw: &str) -> Option<BookId> {
    let trimmed = raw.trim_start();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    format!("{sign}{}", unsigned.get(..len)?).parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_review_ids_continue() {
        let mut store = CatalogStore::seeded();
        let max_seeded = store.last_review_id;

        let (book, _) = store.upsert_review("1", "Still great.").unwrap();

        assert_eq!(book.reviews.last().unwrap().id, max_seeded.next());
        assert_eq!(max_seeded, ReviewId::new(10));
    }

    #[test]
    fn test_empty_store_starts_review_ids_at_zero() {
        let store = CatalogStore::new(Vec::new());
        assert_eq!(store.last_review_id, ReviewId::new(0));
    }

    #[test]
    fn test_updates_do_not_consume_review_ids() {
        let mut store = CatalogStore::seeded();
        store.upsert_review("1", "GOOD BOOK").unwrap();
        store.upsert_review("1", "good book").unwrap();
        let (book, _) = store.upsert_review("2", "Another").unwrap();
        assert_eq!(book.reviews.last().unwrap().id, ReviewId::new(12));
    }

    #[test]
    fn test_parse_book_id() {
        assert_eq!(parse_book_id("4"), Some(BookId::new(4)));
        assert_eq!(parse_book_id("four"), None);
        assert_eq!(parse_book_id(""), None);
        assert_eq!(parse_book_id("-"), None);
    }

    #[test]
    fn test_parse_book_id_reads_leading_digits() {
        assert_eq!(parse_book_id("1abc"), Some(BookId::new(1)));
        assert_eq!(parse_book_id("2.5"), Some(BookId::new(2)));
        assert_eq!(parse_book_id("  3x"), Some(BookId::new(3)));
        assert_eq!(parse_book_id("+4"), Some(BookId::new(4)));
        assert_eq!(parse_book_id("-1"), Some(BookId::new(-1)));
        assert_eq!(parse_book_id("99999999999"), None);
    }

    #[test]
    fn test_ids_with_trailing_text_resolve() {
        let mut store = CatalogStore::seeded();

        let (title, reviews) = store.get_reviews("1abc").unwrap();
        assert_eq!(title, "The Great Gatsby");
        assert_eq!(reviews.len(), 2);

        let (book, _) = store.upsert_review("2.5", "Chilling.").unwrap();
        assert_eq!(book.title, "1984");
        assert!(store.get_reviews("-1").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::TitleNotFound("dune".to_string()).to_string(),
            "No books found with title \"dune\""
        );
        assert!(StoreError::BookNotFound("9".to_string()).is_not_found());
        assert!(!StoreError::EmailTaken.is_not_found());
    }
}
