//! Book queries and review mutations.

use tracing::{debug, instrument};

use super::{CatalogStore, StoreError, parse_book_id};
use crate::models::{Book, Review, ReviewOutcome};

impl CatalogStore {
    /// All books in seed order.
    #[must_use]
    pub fn list_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Find a book by exact ISBN.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IsbnNotFound` if no book has this ISBN.
    pub fn find_by_isbn(&self, isbn: &str) -> Result<Book, StoreError> {
        self.books
            .iter()
            .find(|b| b.isbn == isbn)
            .cloned()
            .ok_or_else(|| StoreError::IsbnNotFound(isbn.to_string()))
    }

    /// Find books whose author equals `author`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AuthorNotFound` if nothing matches.
    pub fn find_by_author(&self, author: &str) -> Result<Vec<Book>, StoreError> {
        non_empty(
            self.books.iter().filter(|b| b.is_by(author)).cloned().collect(),
            || StoreError::AuthorNotFound(author.to_string()),
        )
    }

    /// Find books whose title contains `fragment`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TitleNotFound` if nothing matches.
    pub fn find_by_title(&self, fragment: &str) -> Result<Vec<Book>, StoreError> {
        non_empty(
            self.books
                .iter()
                .filter(|b| b.title_contains(fragment))
                .cloned()
                .collect(),
            || StoreError::TitleNotFound(fragment.to_string()),
        )
    }

    /// Find a book by ID given as raw path input.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BookNotFound` if the ID is not numeric or unknown.
    pub fn find_by_id(&self, raw_id: &str) -> Result<&Book, StoreError> {
        parse_book_id(raw_id)
            .and_then(|id| self.books.iter().find(|b| b.id == id))
            .ok_or_else(|| StoreError::BookNotFound(raw_id.to_string()))
    }

    /// Reviews of a book, with the book title.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BookNotFound` if the book does not exist.
    pub fn get_reviews(&self, raw_id: &str) -> Result<(String, Vec<Review>), StoreError> {
        let book = self.find_by_id(raw_id)?;
        Ok((book.title.clone(), book.reviews.clone()))
    }

    /// Add a review, or rewrite the one whose text matches ignoring case.
    ///
    /// A match has its text replaced with `comment` exactly as given and keeps
    /// its ID. Otherwise a new review is appended.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `comment` is empty.
    /// Returns `StoreError::BookNotFound` if the book does not exist.
    #[instrument(skip(self), fields(book_id = %raw_id))]
    pub fn upsert_review(
        &mut self,
        raw_id: &str,
        comment: &str,
    ) -> Result<(Book, ReviewOutcome), StoreError> {
        if comment.is_empty() {
            return Err(StoreError::Validation("Comment is required.".to_string()));
        }

        let Self {
            books,
            last_review_id,
            ..
        } = self;
        let book = find_book_mut(books, raw_id)?;

        let outcome = if let Some(existing) = book.reviews.iter_mut().find(|r| r.matches(comment)) {
            existing.comment = comment.to_string();
            ReviewOutcome::Updated
        } else {
            *last_review_id = last_review_id.next();
            book.reviews.push(Review::new(*last_review_id, comment));
            ReviewOutcome::Created
        };

        debug!(?outcome, reviews = book.reviews.len(), "Review saved");
        Ok((book.clone(), outcome))
    }

    /// Remove the first review whose text matches `comment`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `comment` is empty.
    /// Returns `StoreError::BookNotFound` if the book does not exist.
    /// Returns `StoreError::ReviewNotFound` if no review matches.
    #[instrument(skip(self), fields(book_id = %raw_id))]
    pub fn delete_review(&mut self, raw_id: &str, comment: &str) -> Result<Book, StoreError> {
        if comment.is_empty() {
            return Err(StoreError::Validation(
                "Comment is required to delete a review.".to_string(),
            ));
        }

        let book = find_book_mut(&mut self.books, raw_id)?;
        let position = book
            .review_position(comment)
            .ok_or_else(|| StoreError::ReviewNotFound {
                comment: comment.to_string(),
                title: book.title.clone(),
            })?;

        book.reviews.remove(position);

        debug!(reviews = book.reviews.len(), "Review deleted");
        Ok(book.clone())
    }
}

fn find_book_mut<'a>(books: &'a mut [Book], raw_id: &str) -> Result<&'a mut Book, StoreError> {
    parse_book_id(raw_id)
        .and_then(|id| books.iter_mut().find(|b| b.id == id))
        .ok_or_else(|| StoreError::BookNotFound(raw_id.to_string()))
}

fn non_empty(
    books: Vec<Book>,
    not_found: impl FnOnce() -> StoreError,
) -> Result<Vec<Book>, StoreError> {
    if books.is_empty() {
        Err(not_found())
    } else {
        Ok(books)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn comments(store: &CatalogStore, raw_id: &str) -> Vec<String> {
        let (_, reviews) = store.get_reviews(raw_id).unwrap();
        reviews.into_iter().map(|r| r.comment).collect()
    }

    #[test]
    fn test_list_books_preserves_order() {
        let store = CatalogStore::seeded();
        let titles: Vec<String> = store.list_books().into_iter().map(|b| b.title).collect();
        assert_eq!(
            titles,
            vec![
                "The Great Gatsby",
                "1984",
                "To Kill a Mockingbird",
                "Animal Farm",
                "The Catcher in the Rye",
            ]
        );
    }

    #[test]
    fn test_find_by_isbn() {
        let store = CatalogStore::seeded();
        assert_eq!(store.find_by_isbn("9780451524935").unwrap().title, "1984");
        assert_eq!(
            store.find_by_isbn("0000000000000"),
            Err(StoreError::IsbnNotFound("0000000000000".to_string()))
        );
    }

    #[test]
    fn test_find_by_author_case_insensitive_in_seed_order() {
        let store = CatalogStore::seeded();
        let books = store.find_by_author("george orwell").unwrap();
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["1984", "Animal Farm"]);
    }

    #[test]
    fn test_find_by_author_requires_full_match() {
        let store = CatalogStore::seeded();
        assert!(matches!(
            store.find_by_author("Orwell"),
            Err(StoreError::AuthorNotFound(_))
        ));
    }

    #[test]
    fn test_find_by_title_substring() {
        let store = CatalogStore::seeded();
        let books = store.find_by_title("THE").unwrap();
        assert_eq!(books.len(), 2);
        assert!(matches!(
            store.find_by_title("dune"),
            Err(StoreError::TitleNotFound(_))
        ));
    }

    #[test]
    fn test_get_reviews_non_numeric_id_is_not_found() {
        let store = CatalogStore::seeded();
        assert_eq!(
            store.get_reviews("abc"),
            Err(StoreError::BookNotFound("abc".to_string()))
        );
        assert!(store.get_reviews("99").is_err());
    }

    #[test]
    fn test_upsert_same_case_is_idempotent() {
        let mut store = CatalogStore::seeded();
        let (_, first) = store.upsert_review("1", "Loved it").unwrap();
        let (book, second) = store.upsert_review("1", "Loved it").unwrap();

        assert_eq!(first, ReviewOutcome::Created);
        assert_eq!(second, ReviewOutcome::Updated);
        assert_eq!(
            book.reviews.iter().filter(|r| r.comment == "Loved it").count(),
            1
        );
    }

    #[test]
    fn test_upsert_existing_comment_updates() {
        let mut store = CatalogStore::seeded();
        let (book, outcome) = store.upsert_review("1", "Beautifully written.").unwrap();
        assert_eq!(outcome, ReviewOutcome::Updated);
        assert_eq!(book.reviews.len(), 2);
    }

    #[test]
    fn test_upsert_different_case_overwrites_and_keeps_id() {
        let mut store = CatalogStore::seeded();
        let original_id = store.find_by_id("1").unwrap().reviews[1].id;

        let (book, outcome) = store.upsert_review("1", "BEAUTIFULLY WRITTEN.").unwrap();

        assert_eq!(outcome, ReviewOutcome::Updated);
        assert_eq!(book.reviews.len(), 2);
        assert_eq!(book.reviews[1].comment, "BEAUTIFULLY WRITTEN.");
        assert_eq!(book.reviews[1].id, original_id);
        assert!(!comments(&store, "1").contains(&"Beautifully written.".to_string()));
    }

    #[test]
    fn test_upsert_appends_with_fresh_id() {
        let mut store = CatalogStore::seeded();
        let (book, outcome) = store.upsert_review("2", "Chilling.").unwrap();

        assert_eq!(outcome, ReviewOutcome::Created);
        let added = book.reviews.last().unwrap();
        assert_eq!(added.comment, "Chilling.");
        assert!(
            store
                .list_books()
                .iter()
                .flat_map(|b| b.reviews.iter())
                .filter(|r| r.id == added.id)
                .count()
                == 1
        );
    }

    #[test]
    fn test_upsert_validation_precedes_lookup() {
        let mut store = CatalogStore::seeded();
        assert!(matches!(
            store.upsert_review("999", ""),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(
            store.upsert_review("999", "Great"),
            Err(StoreError::BookNotFound("999".to_string()))
        );
    }

    #[test]
    fn test_delete_review_case_insensitive() {
        let mut store = CatalogStore::seeded();
        let book = store.delete_review("1", "A TIMELESS CLASSIC!").unwrap();
        assert_eq!(book.reviews.len(), 1);
        assert_eq!(comments(&store, "1"), vec!["Beautifully written."]);
    }

    #[test]
    fn test_delete_missing_review() {
        let mut store = CatalogStore::seeded();
        assert_eq!(
            store.delete_review("3", "Meh."),
            Err(StoreError::ReviewNotFound {
                comment: "Meh.".to_string(),
                title: "To Kill a Mockingbird".to_string(),
            })
        );
        assert!(matches!(
            store.delete_review("3", ""),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_reviews_reflect_applied_operations_in_order() {
        let mut store = CatalogStore::seeded();
        store.upsert_review("5", "Angsty.").unwrap();
        store.upsert_review("5", "Short.").unwrap();
        store.delete_review("5", "an classic.").unwrap();
        store.upsert_review("5", "SHORT.").unwrap();

        assert_eq!(
            comments(&store, "5"),
            vec!["Nice thought behind the book.", "Angsty.", "SHORT."]
        );
    }
}
