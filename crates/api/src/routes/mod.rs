//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! # Catalog
//! GET    /books                          - All books
//! GET    /books/{isbn}                   - Book by ISBN
//! GET    /books/author/{author}          - Books by author (exact, case-insensitive)
//! GET    /books/title/{title}            - Books whose title contains a fragment
//!
//! # Reviews
//! GET    /books/{id}/reviews             - Reviews of a book
//! POST   /books/{id}/review              - Add or update a review
//! DELETE /books/{id}/review              - Delete a review
//!
//! # Users
//! POST   /users/register                 - Register a reader
//! POST   /users/login                    - Password login
//!
//! # Deferred retrieval
//! GET    /allbooks                       - All books, after the retrieval delay
//! GET    /getbooksbyisbn/isbn/{isbn}     - Book by ISBN, after the retrieval delay
//!
//! # External lookup
//! GET    /getbooksbyauthor/author/{author} - Volumes API search by author
//! GET    /getbooksbytitle/title/{title}    - Volumes API search by title
//! ```
//!
//! `/books/{isbn}` and `/books/{id}/...` share one parameter name because the
//! router requires a single name per path position.

pub mod books;
pub mod lookup;
pub mod retrieval;
pub mod reviews;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog and review routes router.
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(books::index))
        .route("/books/{id}", get(books::by_isbn))
        .route("/books/author/{author}", get(books::by_author))
        .route("/books/title/{title}", get(books::by_title))
        .route("/books/{id}/reviews", get(reviews::index))
        .route(
            "/books/{id}/review",
            post(reviews::upsert).delete(reviews::delete),
        )
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
}

/// Create the deferred retrieval routes router.
pub fn retrieval_routes() -> Router<AppState> {
    Router::new()
        .route("/allbooks", get(retrieval::all_books))
        .route("/getbooksbyisbn/isbn/{isbn}", get(retrieval::by_isbn))
}

/// Create the external lookup routes router.
pub fn lookup_routes() -> Router<AppState> {
    Router::new()
        .route("/getbooksbyauthor/author/{author}", get(lookup::by_author))
        .route("/getbooksbytitle/title/{title}", get(lookup::by_title))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(book_routes())
        .nest("/users", user_routes())
        .merge(retrieval_routes())
        .merge(lookup_routes())
}
