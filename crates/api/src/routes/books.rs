//! Catalog query handlers.

use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::Result;
use crate::models::{ApiResponse, Book};
use crate::state::AppState;

/// List every book.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> ApiResponse<Vec<Book>> {
    let books = state.catalog().read().list_books();
    ApiResponse::ok("Available books in the shop", books)
}

/// Show the book with an exact ISBN.
#[instrument(skip(state))]
pub async fn by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<ApiResponse<Book>> {
    let book = state.catalog().read().find_by_isbn(&isbn)?;
    Ok(ApiResponse::ok(format!("Book with ISBN {isbn} found"), book))
}

/// List books by an author.
#[instrument(skip(state))]
pub async fn by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<ApiResponse<Vec<Book>>> {
    let books = state.catalog().read().find_by_author(&author)?;
    Ok(ApiResponse::ok(format!("Books by author {author}"), books))
}

/// List books whose title contains a fragment.
#[instrument(skip(state))]
pub async fn by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<ApiResponse<Vec<Book>>> {
    let books = state.catalog().read().find_by_title(&title)?;
    Ok(ApiResponse::ok(
        format!("Books with title matching \"{title}\""),
        books,
    ))
}
