//! Books loaded into the catalog at startup.

use rust_decimal::Decimal;

use bookshelf_core::{BookId, ReviewId};

use crate::models::{Book, Review};

/// (title, author, price in cents, isbn, reviews)
const SEED: &[(&str, &str, i64, &str, &[&str])] = &[
    (
        "The Great Gatsby",
        "F. Scott Fitzgerald",
        1099,
        "9780743273565",
        &["A timeless classic!", "Beautifully written."],
    ),
    (
        "1984",
        "George Orwell",
        899,
        "9780451524935",
        &["Disturbingly relevant.", "A must-read for everyone."],
    ),
    (
        "To Kill a Mockingbird",
        "Harper Lee",
        1299,
        "9780061120084",
        &["Heartbreaking and inspiring.", "An American classic."],
    ),
    (
        "Animal Farm",
        "George Orwell",
        799,
        "9780451526342",
        &["Good.", "Its nice but who loves animals for those only."],
    ),
    (
        "The Catcher in the Rye",
        "J.D. Salinger",
        999,
        "9780316769488",
        &["Nice thought behind the book.", "An classic."],
    ),
];

/// Build the seed catalog.
///
/// Book IDs start at 1 in list order; review IDs are numbered across the
/// whole catalog in the same order.
#[must_use]
pub fn seed_books() -> Vec<Book> {
    let mut review_id = ReviewId::new(0);
    let mut book_id = BookId::new(0);

    SEED.iter()
        .map(|&(title, author, cents, isbn, comments)| {
            book_id = book_id.next();
            let reviews = comments
                .iter()
                .map(|comment| {
                    review_id = review_id.next();
                    Review::new(review_id, *comment)
                })
                .collect();

            Book {
                id: book_id,
                title: title.to_string(),
                author: author.to_string(),
                price: Decimal::new(cents, 2),
                isbn: isbn.to_string(),
                reviews,
            }
        })
        .collect()
}
